use yield_surface::render::{
    Color, GeometryFrame, LabelPlacement, LabelRole, LinePrimitive, LineRole, LineStyle,
    NullRenderer, Point3, Renderer, TriangulatedSurface,
};

fn grid_style() -> LineStyle {
    LineStyle::new(LineRole::Grid, Color::from_rgb_u32(0xdddddd), 1.0)
}

#[test]
fn null_renderer_counts_frame_content() {
    let frame = GeometryFrame::new()
        .with_primitive(LinePrimitive::segment(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            grid_style(),
        ))
        .with_primitive(LabelPlacement::new(
            "2020",
            Point3::new(0.0, -1.0, -2.0),
            LabelRole::TimeTick,
        ))
        .with_primitive(TriangulatedSurface {
            positions: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            vertex_colors: vec![Color::WHITE; 3],
            faces: vec![[0, 1, 2]],
            face_colors: vec![[Color::WHITE; 3]],
        });

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("valid frame");
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_line_count, 1);
    assert_eq!(renderer.last_label_count, 1);
    assert_eq!(renderer.last_vertex_count, 3);
}

#[test]
fn non_finite_coordinates_fail_validation() {
    let frame = GeometryFrame::new().with_primitive(LinePrimitive::segment(
        Point3::new(f64::NAN, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        grid_style(),
    ));
    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);
}

#[test]
fn faces_must_reference_existing_vertices() {
    let surface = TriangulatedSurface {
        positions: vec![Point3::new(0.0, 0.0, 0.0)],
        vertex_colors: vec![Color::BLACK],
        faces: vec![[0, 1, 2]],
        face_colors: vec![[Color::BLACK; 3]],
    };
    assert!(surface.validate().is_err());
}

#[test]
fn out_of_range_color_channels_fail_validation() {
    let style = LineStyle::new(LineRole::Axis, Color::rgba(1.5, 0.0, 0.0, 1.0), 1.0);
    assert!(style.validate().is_err());
}

#[test]
fn hex_colors_round_trip() {
    let color = Color::from_hex("#243d52").expect("valid hex");
    assert_eq!(color, Color::from_rgb_u32(0x243d52));
    assert_eq!(color.to_hex(), "#243d52");
    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("zzzzzz").is_err());
}

#[test]
fn frame_serializes_to_json() {
    let frame = GeometryFrame::new().with_primitive(LabelPlacement::new(
        "Date",
        Point3::new(0.0, -3.0, -19.0),
        LabelRole::AxisTitle,
    ));
    let json = serde_json::to_string(&frame).expect("serialize");
    assert!(json.contains("\"Date\""));
    assert!(json.contains("AxisTitle"));
}
