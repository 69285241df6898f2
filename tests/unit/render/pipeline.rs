use super::*;

fn touch(dir: &Path, number: usize) {
    std::fs::write(output_path(dir, number), b"old").unwrap();
}

#[test]
fn output_names_are_zero_padded() {
    let dir = Path::new("output");
    assert_eq!(output_path(dir, 1), dir.join("slide01.png"));
    assert_eq!(output_path(dir, 12), dir.join("slide12.png"));
    assert_eq!(output_path(dir, 123), dir.join("slide123.png"));
}

#[test]
fn stale_sweep_stops_at_first_gap() {
    let dir = tempfile::tempdir().unwrap();
    for n in [1, 2, 3, 4, 5, 7] {
        touch(dir.path(), n);
    }

    let removed = remove_stale_outputs(dir.path(), 3).unwrap();
    assert_eq!(
        removed,
        vec![
            output_path(dir.path(), 3),
            output_path(dir.path(), 4),
            output_path(dir.path(), 5),
        ]
    );
    assert!(output_path(dir.path(), 2).exists());
    // Past the gap at 6: known to survive.
    assert!(output_path(dir.path(), 7).exists());
}

#[test]
fn stale_sweep_with_nothing_to_do() {
    let dir = tempfile::tempdir().unwrap();
    assert!(remove_stale_outputs(dir.path(), 1).unwrap().is_empty());
}

#[test]
fn output_dir_is_created_and_reused() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("output");
    ensure_output_dir(&out).unwrap();
    assert!(out.is_dir());
    ensure_output_dir(&out).unwrap();
}

#[test]
fn output_dir_over_a_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("output");
    std::fs::write(&out, b"not a dir").unwrap();
    assert!(ensure_output_dir(&out).is_err());
}

#[test]
fn blank_slide_renders_transparent() {
    use crate::config::model::SetupDef;
    use crate::config::setup::SetupUsage;

    let def = SetupDef {
        width: 16,
        height: 9,
        ..SetupDef::default()
    };
    let setup = Setup::resolve(&def, SetupUsage::default()).unwrap();
    let mut assets = SharedAssets::prepare(&setup, SetupUsage::default()).unwrap();
    let frame = render_slide(&Slide::Blank, 1, &setup, &mut assets).unwrap();
    assert_eq!((frame.width, frame.height), (16, 9));
    assert!(frame.data.iter().all(|&b| b == 0));
}
