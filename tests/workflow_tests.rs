//! End-to-end editing sessions through the public operations.

#![allow(clippy::unwrap_used)]

use openvac::math::{Point2, Vector2};
use openvac::operations::creation::{MakeInbetween, MakePolygon, MakeStroke};
use openvac::operations::modification::{Cut, Paste};
use openvac::operations::query::{BoundingBox, IsValid, Length};
use openvac::operations::transform::Translate;
use openvac::topology::{KeyVertexData, Topology};
use openvac::{CellKind, Complex, Frame, FrameRange, StandardGeometry};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn square(x: f64, y: f64, side: f64) -> Vec<Point2> {
    vec![
        Point2::new(x, y),
        Point2::new(x + side, y),
        Point2::new(x + side, y + side),
        Point2::new(x, y + side),
    ]
}

#[test]
fn animate_square_between_two_keyframes() {
    init_tracing();
    let mut complex: Complex<StandardGeometry> = Complex::new();
    let first = MakePolygon::new(square(0.0, 0.0, 1.0), Frame(0))
        .execute(&mut complex)
        .unwrap();
    let last = MakePolygon::new(square(5.0, 0.0, 2.0), Frame(10))
        .execute(&mut complex)
        .unwrap();
    let tween = MakeInbetween::new(first, last).execute(&mut complex).unwrap();

    assert_eq!(complex.kind(tween).unwrap(), CellKind::InbetweenFace);
    assert_eq!(complex.cells_at_frame(Frame(5)), vec![tween]);
    assert_eq!(complex.cells_in_range(&FrameRange::new(Frame(1), Frame(9))), vec![tween]);
    assert!(IsValid::new().execute(&complex));

    // reversed order is rejected and inserts nothing
    let count = complex.len();
    assert!(MakeInbetween::new(last, first)
        .execute(&mut complex)
        .unwrap_err()
        .is_invalid_topology());
    assert_eq!(complex.len(), count);
}

#[test]
fn cut_keyframe_and_paste_into_new_document() {
    init_tracing();
    let mut complex: Complex<StandardGeometry> = Complex::new();
    let first = MakePolygon::new(square(0.0, 0.0, 1.0), Frame(0))
        .execute(&mut complex)
        .unwrap();
    let last = MakePolygon::new(square(0.0, 0.0, 1.0), Frame(4))
        .execute(&mut complex)
        .unwrap();
    let tween = MakeInbetween::new(first, last).execute(&mut complex).unwrap();

    let (clip, removed) = Cut::new(vec![first]).execute(&mut complex).unwrap();
    assert_eq!(removed, vec![tween, first]);
    // face, four edges and four vertices
    assert_eq!(clip.len(), 9);
    assert!(!complex.contains(tween));
    assert!(IsValid::new().execute(&complex));

    let mut document: Complex<StandardGeometry> = Complex::new();
    let map = Paste::new(&clip).execute(&mut document).unwrap();
    assert_eq!(document.len(), 9);
    let pasted_face = map[&first];
    assert_eq!(document.kind(pasted_face).unwrap(), CellKind::KeyFace);
    assert_eq!(document.boundary(pasted_face).unwrap().len(), 4);
    assert!(IsValid::new().execute(&document));
}

#[test]
fn translate_then_measure() {
    init_tracing();
    let mut complex: Complex<StandardGeometry> = Complex::new();
    let stroke = MakeStroke::new(vec![Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)], Frame(0))
        .execute(&mut complex)
        .unwrap();

    let before = Length::new(stroke.edge).execute(&complex).unwrap();
    assert!((before - 5.0).abs() < 1e-10);

    let moved = Translate::new(vec![stroke.edge], Vector2::new(10.0, 0.0))
        .execute(&mut complex)
        .unwrap();
    assert_eq!(moved, 3);

    let after = Length::new(stroke.edge).execute(&complex).unwrap();
    assert!((after - before).abs() < 1e-10);
    let (start, _) = stroke.vertices.unwrap();
    let vertex = complex.get_as::<KeyVertexData<StandardGeometry>>(start).unwrap();
    assert_eq!(vertex.geometry.position, Point2::new(10.0, 0.0));
    let aabb = BoundingBox::new(stroke.edge).execute(&complex).unwrap();
    assert!(aabb.min.x >= 9.0);
}

#[test]
fn undo_failed_rewire_and_restore_session() {
    init_tracing();
    let mut complex: Complex<StandardGeometry> = Complex::new();
    let a = MakeStroke::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)], Frame(0))
        .execute(&mut complex)
        .unwrap();
    let b = MakeStroke::new(vec![Point2::new(0.0, 1.0), Point2::new(1.0, 1.0)], Frame(2))
        .execute(&mut complex)
        .unwrap();
    let saved = complex.snapshot();

    let (a_start, _) = a.vertices.unwrap();
    let (_, b_end) = b.vertices.unwrap();
    let err = complex
        .set_topology(
            a.edge,
            Topology::KeyEdge {
                start_vertex: Some(a_start),
                end_vertex: Some(b_end),
            },
        )
        .unwrap_err();
    assert!(err.is_invalid_topology());
    assert_eq!(complex, saved);

    complex.remove_cascade(a_start).unwrap();
    assert_ne!(complex, saved);
    complex.restore(saved.clone());
    assert_eq!(complex, saved);
    assert!(IsValid::new().execute(&complex));
}
