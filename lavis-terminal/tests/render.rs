use lavis_core::{parse, IsometricDemo, VectorsDemo};
use lavis_terminal::{render_to_lines, report::VectorsReport};

#[test]
fn vectors_demo_renders_with_labels() {
    let lines = render_to_lines(&VectorsDemo::new().unwrap().plot(), 72, 24);

    assert_eq!(lines.len(), 24);
    assert!(lines[0].contains("Linear Transformation"));
    // x label sits on the last row, centred under the plot
    assert!(lines[23].contains('x'));
    assert!(lines[23].contains("-3.0"));
    assert!(lines.iter().any(|l| l.starts_with('y')));
}

#[test]
fn rendering_is_deterministic() {
    let plot = IsometricDemo::new().unwrap().plot().unwrap();
    assert_eq!(render_to_lines(&plot, 60, 30), render_to_lines(&plot, 60, 30));
}

#[test]
fn custom_inputs_flow_through() {
    let demo = VectorsDemo {
        map: parse::parse_matrix2("0 -1; 1 0").unwrap(),
        vector: parse::parse_vector2("[2, 0]").unwrap(),
        show_image_triangle: true,
        ..VectorsDemo::new().unwrap()
    };

    let report = VectorsReport(&demo).to_string();
    assert!(report.contains("A·v = [  0.000000,   2.000000]"));
    assert!(report.contains("image of triangle:"));

    let plot = demo.plot();
    assert_eq!(plot.segments.len(), 6);
    let lines = render_to_lines(&plot, 72, 24);
    assert!(lines.iter().any(|l| l.contains('^')));
}
