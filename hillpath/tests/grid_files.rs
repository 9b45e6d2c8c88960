use std::path::{Path, PathBuf};

use anyhow::Result;

use hillpath_lib::{HeightMap, LoadError, MalformedGridError, Report, Strategy};

fn data_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

#[test]
fn sample_file_answers() -> Result<()> {
    let map = HeightMap::from_file(data_path("sample.txt"))?;
    for strategy in [Strategy::Repeated, Strategy::Reverse] {
        let report = Report::solve(&map, strategy, true);
        assert_eq!(report.distance, Some(31), "{strategy:?}");
        assert_eq!(report.best_distance, Some(29), "{strategy:?}");
        let path = report.path.as_ref().expect("path is kept");
        assert_eq!(path.len(), 32);
        for step in path.windows(2) {
            assert!(map.can_step(step[0], step[1]));
        }
    }
    Ok(())
}

#[test]
fn walled_file_is_unreachable() -> Result<()> {
    let map = HeightMap::from_file(data_path("walled.txt"))?;
    let report = Report::solve(&map, Strategy::Repeated, false);
    assert_eq!(report.distance, None);
    assert_eq!(report.best_distance, None);
    assert_eq!(report.candidates, 9);
    Ok(())
}

#[test]
fn ragged_file_is_rejected() {
    let err = HeightMap::from_file(data_path("ragged.txt")).unwrap_err();
    match err {
        LoadError::Malformed(MalformedGridError::Ragged {
            row,
            expected,
            found,
        }) => assert_eq!((row, expected, found), (1, 4, 3)),
        other => panic!("unexpected error: {other}"),
    }
}
