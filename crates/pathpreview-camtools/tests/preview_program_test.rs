use pathpreview_analyzer::PathAnalyzer;
use pathpreview_camtools::{CamToolError, PreviewProgramGenerator, PreviewProgramWriter};

fn plan_for(program: &str, safety_height: f64) -> pathpreview_camtools::PreviewPlan {
    let analysis = PathAnalyzer::new().analyze(program.lines()).unwrap();
    let bounds = analysis.bounds().unwrap();
    PreviewProgramGenerator::new(safety_height)
        .unwrap()
        .generate(&bounds)
}

#[test]
fn test_full_circle_program() {
    let plan = plan_for("G00 X10 Y0 Z2\nG01 Z-1.5\nG02 X10 Y0 I-10 J0", 25.0);
    let gcode = PreviewProgramWriter::default().render(&plan, "PathPreview_circle.nc");

    let body = gcode
        .split_once("G90\n\n")
        .map(|(_, body)| body)
        .unwrap();
    assert_eq!(
        body,
        "MSG \"Zmin of this job: -1.500\"\n\
         G00 X0.000 Y0.000 Z25.000\n\
         MSG \"PathPreview: Hit START to go to Ymin: X0.000 Y-10.000 Z25.000\"\n\
         M00\n\
         G00 X0.000 Y-10.000 Z25.000\n\
         MSG \"PathPreview: Hit START to go to Xmin: X-10.000 Y0.000 Z25.000\"\n\
         M00\n\
         G00 X-10.000 Y0.000 Z25.000\n\
         MSG \"PathPreview: Hit START to go to Ymax: X0.000 Y10.000 Z25.000\"\n\
         M00\n\
         G00 X0.000 Y10.000 Z25.000\n\
         MSG \"PathPreview: Hit START to go to Xmax: X10.000 Y0.000 Z25.000\"\n\
         M00\n\
         G00 X10.000 Y0.000 Z25.000\n\
         M30\n"
    );
}

#[test]
fn test_program_header() {
    let plan = plan_for("G01 X1 Y1", 25.0);
    let gcode = PreviewProgramWriter::default().render(&plan, "PathPreview_part.nc");

    let expected = format!(
        "(CNCPathPreview)\n\
         (Release: {})\n\
         (File output is supplied without liability.)\n\
         (Output paths must be checked for correctness before usage.)\n\n\
         (Project: PathPreview_part.nc)\n\n\
         G90\n\n",
        env!("CARGO_PKG_VERSION")
    );
    assert!(gcode.starts_with(&expected));
}

#[test]
fn test_write_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("PathPreview_square.nc");
    let plan = plan_for("G00 X0 Y0\nG01 X20\nG01 Y20\nG01 X0\nG01 Y0", 15.0);

    PreviewProgramWriter::default()
        .write(&plan, "PathPreview_square.nc", &path)
        .unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("(Project: PathPreview_square.nc)"));
    assert!(written.contains("G00 X20.000 Y0.000 Z15.000"));
    assert!(written.ends_with("M30\n"));

    // Only the destination remains; the temporary file was moved into place
    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn test_write_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.nc");
    std::fs::write(&path, "old contents").unwrap();

    let plan = plan_for("G01 X1 Y1", 25.0);
    PreviewProgramWriter::default()
        .write(&plan, "out.nc", &path)
        .unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(!written.contains("old contents"));
}

#[test]
fn test_write_to_missing_directory_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.nc");
    let plan = plan_for("G01 X1 Y1", 25.0);

    let err = PreviewProgramWriter::default()
        .write(&plan, "out.nc", &path)
        .unwrap_err();
    assert!(matches!(err, CamToolError::WriteFailed { .. }));
    assert!(!path.exists());
}
