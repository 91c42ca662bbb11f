use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A minimal but realistic version-resource file, as produced by a resource
/// compiler template.
pub const SAMPLE_RESOURCE: &str = "\
#include \"winres.h\"

VS_VERSION_INFO VERSIONINFO
 FILEVERSION 2,41,0,0
 PRODUCTVERSION 2,0,0,0
 FILEFLAGSMASK 0x3fL
BEGIN
    BLOCK \"StringFileInfo\"
    BEGIN
        BLOCK \"040904b0\"
        BEGIN
            VALUE \"FileDescription\", \"Sample tool\\0\"
            VALUE \"FileVersion\", \"2.3.41\\0\"
            VALUE \"ProductVersion\", \"2.3\\0\"
        END
    END
END
";

/// Scratch project directory with counter/header/resource paths laid out.
pub struct Fixture {
    pub tmp: TempDir,
    pub counter: PathBuf,
    pub header: PathBuf,
    pub resource: PathBuf,
}

impl Fixture {
    /// Empty scratch directory; none of the three artifacts exist yet.
    pub fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let counter = tmp.path().join("utils/build_info.txt");
        let header = tmp.path().join("src/build_info.h");
        let resource = tmp.path().join("version.rc");
        Fixture {
            tmp,
            counter,
            header,
            resource,
        }
    }

    /// Scratch directory with a counter line and the sample resource file.
    pub fn with_counter(content: &str) -> Self {
        let fixture = Self::new();
        write_file(&fixture.counter, content);
        write_file(&fixture.resource, SAMPLE_RESOURCE);
        fixture
    }

    /// assert_cmd invocation of the stamper with this fixture's paths.
    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("buildstamp").unwrap();
        cmd.current_dir(self.tmp.path())
            .arg("--counter")
            .arg(&self.counter)
            .arg("--header")
            .arg(&self.header)
            .arg("--resource")
            .arg(&self.resource);
        cmd
    }

    pub fn counter_content(&self) -> String {
        fs::read_to_string(&self.counter).unwrap()
    }

    pub fn header_content(&self) -> String {
        fs::read_to_string(&self.header).unwrap()
    }

    pub fn resource_content(&self) -> String {
        fs::read_to_string(&self.resource).unwrap()
    }
}

/// Write a file, creating parent directories first.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
