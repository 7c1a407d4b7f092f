use crate::session::{AuthoringState, Batch, Circle, Triangle};
use crate::{CanvasPoint, Colour, Command, DrawingMode, Point, Primitive, Session, Surface};

const SURFACE: Surface = Surface {
    width: 200.0,
    height: 100.0,
};

fn click(session: &mut Session, x: i32, y: i32) -> crate::Frame {
    session
        .apply(Command::Click(CanvasPoint::new(x, y), SURFACE))
        .expect("Click should always redraw.")
}

fn batches_of(frame: &crate::Frame, primitive: Primitive) -> Vec<&Batch> {
    frame
        .batches
        .iter()
        .filter(|b| b.primitive == primitive)
        .collect()
}

#[test]
fn test_pixel_to_ndc() {
    assert_eq!(SURFACE.ndc(CanvasPoint::new(0, 0)), Point::new(-1.0, 1.0));
    assert_eq!(SURFACE.ndc(CanvasPoint::new(200, 100)), Point::new(1.0, -1.0));
    assert_eq!(SURFACE.ndc(CanvasPoint::new(100, 50)), Point::ORIGIN);
    assert_eq!(SURFACE.ndc(CanvasPoint::new(50, 75)), Point::new(-0.5, -0.5));
}

#[test]
fn test_point_mode_adds_one_point_per_click() {
    let mut session = Session::default();
    assert_eq!(session.state(), AuthoringState::IdlePoint);

    let clicks = [(0, 0), (100, 50), (50, 75), (50, 75)];
    for (i, (x, y)) in clicks.into_iter().enumerate() {
        click(&mut session, x, y);
        assert_eq!(session.points().len(), i + 1);
        assert_eq!(
            session.points()[i],
            SURFACE.ndc(CanvasPoint::new(x, y)),
        );
    }
    assert_eq!(session.state(), AuthoringState::IdlePoint);
    assert!(session.triangles().is_empty());
}

#[test]
fn test_triangle_commits_on_third_click() {
    let mut session = Session::default();
    session.apply(Command::SetMode(DrawingMode::Triangle));
    assert_eq!(session.state(), AuthoringState::IdleTriangle);

    click(&mut session, 0, 0);
    assert_eq!(session.state(), AuthoringState::TrianglePending1);
    click(&mut session, 200, 0);
    assert_eq!(session.state(), AuthoringState::TrianglePending2);
    assert!(session.triangles().is_empty());

    let frame = click(&mut session, 100, 100);
    assert_eq!(session.state(), AuthoringState::IdleTriangle);
    assert!(session.pending_triangle().is_empty());
    assert_eq!(
        session.triangles(),
        &[Triangle([
            Point::new(-1.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, -1.0),
        ])]
    );

    // Committed vertices are no longer drawn as markers.
    assert!(batches_of(&frame, Primitive::Points).is_empty());
    let triangles = batches_of(&frame, Primitive::Triangles);
    assert_eq!(triangles.len(), 1);
    assert_eq!(triangles[0].vertices.n(), 3);
}

#[test]
fn test_two_triangles_share_a_batch() {
    let mut session = Session::default();
    session.set_mode(DrawingMode::Triangle);
    for _ in 0..2 {
        click(&mut session, 0, 0);
        click(&mut session, 10, 0);
        click(&mut session, 0, 10);
    }

    let frame = session.frame();
    let triangles = batches_of(&frame, Primitive::Triangles);
    assert_eq!(triangles.len(), 1);
    assert_eq!(triangles[0].vertices.n(), 6);
    assert_eq!(session.triangles().len(), 2);
}

#[test]
fn test_circle_from_center_and_edge() {
    let mut session = Session::default();
    session.set_mode(DrawingMode::Circle);

    session.click(Point::ORIGIN);
    assert_eq!(session.state(), AuthoringState::CirclePendingCenter);
    assert_eq!(session.pending_center(), Some(Point::ORIGIN));

    let frame = session.click(Point::new(1.0, 0.0));
    assert_eq!(session.state(), AuthoringState::IdleCircle);
    assert_eq!(session.pending_center(), None);

    let circle = &session.circles()[0];
    assert_eq!(circle.radius, 1.0);
    assert_eq!(circle.fan().n(), 42);
    assert_eq!(circle.fan().points().next(), Some(Point::ORIGIN));

    let step = 2.0 * std::f32::consts::PI / 40.0;
    for (i, p) in circle.fan().points().skip(1).enumerate() {
        let theta = i as f32 * step;
        assert!((p.x - theta.cos()).abs() < 1e-5);
        assert!((p.y - theta.sin()).abs() < 1e-5);
        assert!((p.dist(Point::ORIGIN) - 1.0).abs() < 1e-5);
    }

    // Closed: the last sample lands back on the first.
    let first = circle.fan().points().nth(1).unwrap();
    let last = circle.fan().points().last().unwrap();
    assert!(first.dist(last) < 1e-5);

    let fans = batches_of(&frame, Primitive::TriangleFan);
    assert_eq!(fans.len(), 1);
    assert_eq!(fans[0].vertices.n(), Circle::VERTICES);
}

#[test]
fn test_circle_from_pixels() {
    let mut session = Session::default();
    session.set_mode(DrawingMode::Circle);

    click(&mut session, 100, 50);
    click(&mut session, 200, 50);
    assert_eq!(session.circles().len(), 1);
    assert_eq!(session.circles()[0].center, Point::ORIGIN);
    assert_eq!(session.circles()[0].radius, 1.0);
}

#[test]
fn test_each_circle_is_its_own_fan() {
    let mut session = Session::default();
    session.set_mode(DrawingMode::Circle);
    for i in 0..3 {
        session.click(Point::new(i as f32 * 0.1, 0.0));
        session.click(Point::new(i as f32 * 0.1, 0.5));
    }

    assert_eq!(batches_of(&session.frame(), Primitive::TriangleFan).len(), 3);
}

fn markers(frame: &crate::Frame) -> Vec<Point> {
    batches_of(frame, Primitive::Points)
        .iter()
        .flat_map(|b| b.vertices.points())
        .collect()
}

#[test]
fn test_pending_vertices_drawn_as_points() {
    let mut session = Session::default();
    session.click(Point::new(0.5, 0.5));

    session.set_mode(DrawingMode::Triangle);
    session.click(Point::new(0.1, 0.1));

    session.set_mode(DrawingMode::Circle);
    let frame = session.click(Point::new(-0.5, -0.5));

    assert_eq!(batches_of(&frame, Primitive::Points).len(), 1);
    assert_eq!(
        markers(&frame),
        vec![
            Point::new(0.5, 0.5),
            Point::new(0.1, 0.1),
            Point::new(-0.5, -0.5),
        ]
    );
    assert_eq!(session.points(), &markers(&frame)[..]);
}

#[test]
fn test_finished_shape_removes_its_markers() {
    let mut session = Session::default();
    session.click(Point::new(0.5, 0.5));
    session.set_mode(DrawingMode::Triangle);
    session.click(Point::new(0.0, 0.0));
    session.click(Point::new(0.1, 0.0));
    let frame = session.click(Point::new(0.0, 0.1));
    assert_eq!(markers(&frame), vec![Point::new(0.5, 0.5)]);

    session.set_mode(DrawingMode::Circle);
    session.click(Point::ORIGIN);
    let frame = session.click(Point::new(0.2, 0.0));
    assert_eq!(markers(&frame), vec![Point::new(0.5, 0.5)]);
}

#[test]
fn test_mode_switch_keeps_pending_triangle() {
    let mut session = Session::default();
    session.set_mode(DrawingMode::Triangle);
    session.click(Point::new(0.1, 0.1));

    assert_eq!(session.apply(Command::SetMode(DrawingMode::Point)), None);
    assert_eq!(session.mode(), DrawingMode::Point);
    assert_eq!(session.pending_triangle().len(), 1);
    session.click(Point::new(0.9, 0.9));

    session.set_mode(DrawingMode::Triangle);
    assert_eq!(session.state(), AuthoringState::TrianglePending1);
    session.click(Point::new(0.5, 0.0));
    let frame = session.click(Point::new(0.0, 0.5));

    assert_eq!(session.triangles().len(), 1);

    // Finishing the triangle drops the newest three markers, taking the
    // standalone point with it and leaving the first vertex behind.
    assert_eq!(markers(&frame), vec![Point::new(0.1, 0.1)]);
    assert_eq!(session.points(), &[Point::new(0.1, 0.1)]);
}

#[test]
fn test_mode_switch_keeps_pending_center() {
    let mut session = Session::default();
    session.set_mode(DrawingMode::Circle);
    session.click(Point::ORIGIN);

    session.set_mode(DrawingMode::Point);
    session.click(Point::new(0.9, 0.9));

    session.set_mode(DrawingMode::Circle);
    assert_eq!(session.state(), AuthoringState::CirclePendingCenter);
    let frame = session.click(Point::new(0.3, 0.4));

    assert_eq!(session.circles().len(), 1);
    assert!((session.circles()[0].radius - 0.5).abs() < 1e-6);
    assert_eq!(markers(&frame), vec![Point::ORIGIN]);
}

#[test]
fn test_clear_empties_everything() {
    let mut session = Session::new(Colour::RED, Colour::BLACK);
    session.click(Point::new(0.2, 0.2));
    session.set_mode(DrawingMode::Triangle);
    for p in [(0.0, 0.0), (0.1, 0.0), (0.0, 0.1), (0.3, 0.3)] {
        session.click(Point::new(p.0, p.1));
    }
    session.set_mode(DrawingMode::Circle);
    session.click(Point::ORIGIN);
    session.click(Point::new(0.2, 0.0));
    session.click(Point::new(0.4, 0.4));

    let frame = session.apply(Command::Clear).unwrap();

    assert!(session.points().is_empty());
    assert!(session.triangles().is_empty());
    assert!(session.circles().is_empty());
    assert!(session.pending_triangle().is_empty());
    assert_eq!(session.pending_center(), None);
    assert!(frame.batches.is_empty());
    assert_eq!(frame.clear, Colour::BLACK);

    // Mode is untouched.
    assert_eq!(session.state(), AuthoringState::IdleCircle);
}

#[test]
fn test_clear_on_empty_session() {
    let mut session = Session::default();
    let frame = session.clear();
    assert!(frame.batches.is_empty());
    assert_eq!(session.state(), AuthoringState::IdlePoint);
}

#[test]
fn test_background_applies_on_clear() {
    let mut session = Session::new(Colour::RED, Colour::TRANSPARENT);
    let blue = Colour::from_hex("#0000ff").unwrap();

    assert_eq!(session.apply(Command::SetBackground(blue)), None);
    assert_eq!(session.frame().clear, Colour::TRANSPARENT);

    let frame = session.apply(Command::Clear).unwrap();
    assert_eq!(frame.clear, blue);
    assert_eq!(session.frame().clear, blue);
}

#[test]
fn test_colour_change_redraws_everything() {
    let mut session = Session::default();
    session.click(Point::ORIGIN);
    let green = Colour::from_hex("#00ff00").unwrap();

    let frame = session.apply(Command::SetColour(green)).unwrap();
    assert_eq!(frame.colour, green);
    assert_eq!(frame.batches.len(), 1);
    assert_eq!(session.colour(), green);
}

#[test]
fn test_parse_drawing_mode() {
    assert_eq!("triangle".parse::<DrawingMode>(), Ok(DrawingMode::Triangle));
    assert_eq!("Circle".parse::<DrawingMode>(), Ok(DrawingMode::Circle));
    assert!("square".parse::<DrawingMode>().is_err());
}
