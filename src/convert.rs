use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::data::loader::load_csv;
use crate::data::model::ConversionUnit;
use crate::data::render::render_js;
use crate::error::{ConvertError, Result};

// ---------------------------------------------------------------------------
// Batch run
// ---------------------------------------------------------------------------

/// Convert every CSV in every assignment directory under `config.root`.
///
/// Stops at the first error. Files written before the failure stay on disk.
pub fn convert_all(config: &Config) -> Result<Vec<ConversionUnit>> {
    let mut converted = Vec::new();

    for dir in assignment_dirs(&config.root, &config.dir_prefix)? {
        for source in csv_files(&dir, &config.csv_suffix)? {
            let unit = ConversionUnit {
                output: output_path(&source, &config.csv_suffix, &config.output_suffix),
                source,
            };
            convert_file(&unit, config)?;
            converted.push(unit);
        }
    }

    log::info!("Converted {} file(s)", converted.len());
    Ok(converted)
}

/// Parse one CSV and overwrite its JavaScript counterpart.
pub fn convert_file(unit: &ConversionUnit, config: &Config) -> Result<()> {
    let table = load_csv(&unit.source)?;
    let js = render_js(&table, &config.render)?;
    fs::write(&unit.output, js).map_err(|source| ConvertError::Write {
        path: unit.output.clone(),
        source,
    })?;

    log::info!(
        " Converted {} → {}",
        unit.source.display(),
        unit.output.display()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Traversal
// ---------------------------------------------------------------------------

/// Immediate subdirectories of `root` whose name starts with `prefix`,
/// sorted by name.
pub fn assignment_dirs(root: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = list_dir(root)?
        .into_iter()
        .filter(|path| {
            let matches = file_name(path).is_some_and(|name| name.starts_with(prefix));
            if !matches {
                log::debug!("Skipping {}", path.display());
            }
            matches && path.is_dir()
        })
        .collect();
    dirs.sort();
    Ok(dirs)
}

/// Entries of `dir` whose name ends with `suffix`, sorted by name.
///
/// Selection is by name only; a matching entry that is not a readable file
/// fails later when it is opened.
pub fn csv_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = list_dir(dir)?
        .into_iter()
        .filter(|path| file_name(path).is_some_and(|name| name.ends_with(suffix)))
        .collect();
    files.sort();
    Ok(files)
}

/// `<dir>/<stem><csv_suffix>` → `<dir>/<stem><output_suffix>`.
///
/// Only the trailing suffix is replaced; a path without it gets
/// `output_suffix` appended.
pub fn output_path(source: &Path, csv_suffix: &str, output_suffix: &str) -> PathBuf {
    let name = file_name(source).unwrap_or_default();
    let stem = name.strip_suffix(csv_suffix).unwrap_or(name);
    source.with_file_name(format!("{stem}{output_suffix}"))
}

fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_err = |source| ConvertError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    fs::read_dir(dir)
        .map_err(read_err)?
        .map(|entry| entry.map(|e| e.path()).map_err(read_err))
        .collect()
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const IRIS_CSV: &str = "sepal_length,sepal_width,species\n5.1,3.5,setosa\n";
    const IRIS_JS: &str = concat!(
        "const irisData = [\n",
        "  {\n",
        "    \"sepal_length\": \"5.1\",\n",
        "    \"sepal_width\": \"3.5\",\n",
        "    \"species\": \"setosa\"\n",
        "  }\n",
        "];"
    );

    fn write(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn converts_iris_scenario() {
        let tmp = tempdir().unwrap();
        write(&tmp.path().join("312540006_hw1/iris.csv"), IRIS_CSV);

        let config = Config::default().with_root(tmp.path());
        let units = convert_all(&config).unwrap();

        let out = tmp.path().join("312540006_hw1/iris_data.js");
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].output, out);
        assert_eq!(fs::read_to_string(out).unwrap(), IRIS_JS);
    }

    #[test]
    fn header_only_csv_gives_empty_array() {
        let tmp = tempdir().unwrap();
        write(&tmp.path().join("312540006_hw2/iris.csv"), "a,b\n");

        convert_all(&Config::default().with_root(tmp.path())).unwrap();

        let out = tmp.path().join("312540006_hw2/iris_data.js");
        let js = fs::read_to_string(out).unwrap();
        assert_eq!(js, "const irisData = [];");
    }

    #[test]
    fn non_matching_dirs_are_skipped() {
        let tmp = tempdir().unwrap();
        write(&tmp.path().join("other_hw1/iris.csv"), IRIS_CSV);
        write(&tmp.path().join("312640006_hw4/iris.csv"), IRIS_CSV);
        // A plain file with the prefix is not a directory.
        write(&tmp.path().join("312540006_hw_notes.csv"), IRIS_CSV);

        let units = convert_all(&Config::default().with_root(tmp.path())).unwrap();

        assert!(units.is_empty());
        assert!(!tmp.path().join("other_hw1/iris_data.js").exists());
        assert!(!tmp.path().join("312640006_hw4/iris_data.js").exists());
    }

    #[test]
    fn non_csv_files_are_ignored() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("312540006_hw3");
        write(&dir.join("iris.csv"), IRIS_CSV);
        write(&dir.join("notes.txt"), "a,b\n1,2\n");
        write(&dir.join("iris.csv.bak"), IRIS_CSV);
        write(&dir.join("index.html"), "<html></html>");

        let units = convert_all(&Config::default().with_root(tmp.path())).unwrap();

        assert_eq!(units.len(), 1);
        assert!(!dir.join("notes_data.js").exists());
        assert!(!dir.join("iris.csv.bak_data.js").exists());
    }

    #[test]
    fn processes_dirs_and_files_in_name_order() {
        let tmp = tempdir().unwrap();
        write(&tmp.path().join("312540006_hw2/b.csv"), IRIS_CSV);
        write(&tmp.path().join("312540006_hw2/a.csv"), IRIS_CSV);
        write(&tmp.path().join("312540006_hw1/z.csv"), IRIS_CSV);

        let units = convert_all(&Config::default().with_root(tmp.path())).unwrap();
        let names: Vec<_> = units
            .iter()
            .map(|u| u.source.strip_prefix(tmp.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            names,
            vec![
                PathBuf::from("312540006_hw1/z.csv"),
                PathBuf::from("312540006_hw2/a.csv"),
                PathBuf::from("312540006_hw2/b.csv"),
            ]
        );
    }

    #[test]
    fn rerun_is_byte_identical() {
        let tmp = tempdir().unwrap();
        write(
            &tmp.path().join("312540006_hw5/data.csv"),
            "name,city\nAnn,Zürich\n\"Lee, B\",Oslo\n",
        );
        let config = Config::default().with_root(tmp.path());
        let out = tmp.path().join("312540006_hw5/data_data.js");

        convert_all(&config).unwrap();
        let first = fs::read(&out).unwrap();
        convert_all(&config).unwrap();
        let second = fs::read(&out).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn existing_output_is_overwritten() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("312540006_hw6");
        write(&dir.join("iris.csv"), IRIS_CSV);
        let stale = "stale contents that are longer than the new output ".repeat(20);
        write(&dir.join("iris_data.js"), &stale);

        convert_all(&Config::default().with_root(tmp.path())).unwrap();

        assert_eq!(fs::read_to_string(dir.join("iris_data.js")).unwrap(), IRIS_JS);
    }

    #[test]
    fn custom_var_name_is_used() {
        let tmp = tempdir().unwrap();
        write(&tmp.path().join("312540006_hw7/iris.csv"), "k\nv\n");

        let config = Config::default().with_root(tmp.path()).with_var_name("rows");
        convert_all(&config).unwrap();

        let out = tmp.path().join("312540006_hw7/iris_data.js");
        let js = fs::read_to_string(out).unwrap();
        assert!(js.starts_with("const rows = ["));
    }

    #[test]
    fn malformed_csv_aborts_run() {
        let tmp = tempdir().unwrap();
        write(&tmp.path().join("312540006_hw1/good.csv"), IRIS_CSV);
        write(&tmp.path().join("312540006_hw2/bad.csv"), "a,b\n1,2,3\n");

        let err = convert_all(&Config::default().with_root(tmp.path())).unwrap_err();

        assert!(matches!(err, ConvertError::Csv { .. }));
        // Earlier output is left in place.
        assert!(tmp.path().join("312540006_hw1/good_data.js").exists());
        assert!(!tmp.path().join("312540006_hw2/bad_data.js").exists());
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = tempdir().unwrap();
        let config = Config::default().with_root(tmp.path().join("nope"));
        let err = convert_all(&config).unwrap_err();
        assert!(matches!(err, ConvertError::ReadDir { .. }));
    }

    #[test]
    fn output_path_replaces_trailing_suffix_only() {
        let path = output_path(Path::new("hw/a.csv.csv"), ".csv", "_data.js");
        assert_eq!(path, PathBuf::from("hw/a.csv_data.js"));

        let path = output_path(Path::new("hw/iris.csv"), ".csv", "_data.js");
        assert_eq!(path, PathBuf::from("hw/iris_data.js"));
    }

    #[test]
    fn generated_file_matches_direct_csv_read() {
        let tmp = tempdir().unwrap();
        let csv_text = "id,label,id\n1,alpha,9\n2,\"be\"\"ta\",8\n3,,7\n";
        let source = tmp.path().join("312540006_hw8/mix.csv");
        write(&source, csv_text);

        convert_all(&Config::default().with_root(tmp.path())).unwrap();

        let out = tmp.path().join("312540006_hw8/mix_data.js");
        let js = fs::read_to_string(out).unwrap();
        let body = js
            .strip_prefix("const irisData = ")
            .and_then(|s| s.strip_suffix(';'))
            .unwrap();
        let parsed: Vec<serde_json::Map<String, serde_json::Value>> =
            serde_json::from_str(body).unwrap();

        let table = load_csv(&source).unwrap();
        assert_eq!(parsed.len(), table.len());
        for (obj, row) in parsed.iter().zip(&table.rows) {
            assert_eq!(obj.len(), 2);
            assert_eq!(obj["id"].as_str(), row.get("id"));
            assert_eq!(obj["label"].as_str(), row.get("label"));
        }
        assert_eq!(parsed[1]["id"], "8");
        assert_eq!(parsed[1]["label"], "be\"ta");
    }
}
