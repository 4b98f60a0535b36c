/*
    Constants

    Where test-data graphs live, where the file driver writes result
    dumps, and the parameters of the built-in demo.
*/

// Folder with .lg input graphs used by demos and tests
pub const TESTDATA_DIR: &str = "testdata";

// Output directory used by the file driver when saving results
pub const RESULTS_DIR: &str = "results";

// Parameters of the triangle demo
pub const DEMO_MIN_SUPPORT: usize = 1;
pub const DEMO_MAX_SIZE: usize = 3;

#[test]
fn validate_testdata_dir() {
    use std::path::Path;

    assert!(Path::new(TESTDATA_DIR).is_dir());
}
