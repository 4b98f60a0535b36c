/*
    System utility functions used by the binaries

    (File I/O, JSON serialization, timestamps.)
*/

use serde::ser::Serialize;
use std::fmt::Debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

/*
    File I/O
*/

fn path_writer<P>(path: P) -> BufWriter<File>
where
    P: AsRef<Path> + Debug,
{
    BufWriter::new(File::create(&path).unwrap_or_else(|err| {
        panic!("Could not open file for writing: {:?} -- {}", path, err)
    }))
}

pub fn to_json_file<P, T>(path: P, data: T)
where
    P: AsRef<Path> + Debug,
    T: Serialize,
{
    let mut writer = path_writer(&path);
    serde_json::to_writer_pretty(&mut writer, &data).unwrap_or_else(|err| {
        panic!("Could not write JSON to {:?} -- {}", path, err)
    });
    writeln!(&mut writer).unwrap_or_else(|err| {
        panic!("Could not append newline to file: {:?} -- {}", path, err)
    });
}

pub fn lines_to_file<P>(path: P, lines: &[String])
where
    P: AsRef<Path> + Debug,
{
    let mut writer = path_writer(&path);
    for line in lines {
        writeln!(writer, "{}", line).unwrap_or_else(|err| {
            panic!("Could not write to {:?} -- {}", path, err)
        });
    }
}

/*
    Time-related functions
*/

const DATETIME_FMT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]-[hour][minute][second]");

// Current datetime (UTC) for use in file names
pub fn current_datetime_str() -> String {
    OffsetDateTime::now_utc().format(&DATETIME_FMT).unwrap_or_else(|err| {
        panic!("Could not format current datetime -- {}", err)
    })
}
