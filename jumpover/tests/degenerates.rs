use jumpover::{Connector, Error, Point, Surface};
use serde_json::json;

fn gap() -> Option<Connector> {
    Some(Connector::jumpover(json!({ "jump": "gap" })))
}

fn surface(subject: (Point, Point), other: (Point, Point)) -> (Surface, u32) {
    let mut s = Surface::new();
    let a = s.add_link(subject.0, subject.1).unwrap();
    s.add_link(other.0, other.1).unwrap();
    s.set_connector(a, gap()).unwrap();
    (s, a)
}

#[test]
fn zero_length_link_crosses_nothing() {
    let p = Point::new(10.0, 10.0);
    let (mut s, a) = surface((p, p), (Point::new(0.0, 10.0), Point::new(20.0, 10.0)));
    assert_eq!(s.render_link(a).unwrap().into_path_string(), "M 10 10 L 10 10");
}

#[test]
fn collinear_overlap_is_not_a_crossing() {
    let (mut s, a) = surface(
        (Point::new(0.0, 0.0), Point::new(100.0, 0.0)),
        (Point::new(20.0, 0.0), Point::new(80.0, 0.0)),
    );
    assert_eq!(s.render_link(a).unwrap().into_path_string(), "M 0 0 L 100 0");
}

#[test]
fn touching_peer_still_gets_a_jump() {
    let (mut s, a) = surface(
        (Point::new(0.0, 0.0), Point::new(100.0, 0.0)),
        (Point::new(50.0, 0.0), Point::new(50.0, 100.0)),
    );
    assert_eq!(s.render_link(a).unwrap().into_path_string(), "M 0 0 L 45 0 M 55 0 L 100 0");
}

#[test]
fn bad_routes_leave_the_link_untouched() {
    let (mut s, a) = surface(
        (Point::new(0.0, 0.0), Point::new(100.0, 0.0)),
        (Point::new(50.0, -50.0), Point::new(50.0, 50.0)),
    );
    let ver = s.geom_version();
    let err = s.set_link_route(a, vec![Point::new(1.0, f64::INFINITY)]).unwrap_err();
    assert!(matches!(err, Error::NonFinite { param: "route" }));
    let too_long = vec![Point::new(1.0, 1.0); jumpover::geometry::limits::MAX_ROUTE_POINTS + 1];
    assert!(matches!(s.set_link_route(a, too_long), Err(Error::RouteTooLong { .. })));
    assert_eq!(s.geom_version(), ver);
    assert!(s.get_link(a).unwrap().route.is_empty());
}

#[test]
fn reloaded_surface_starts_unregistered() {
    let (mut s, a) = surface(
        (Point::new(0.0, 50.0), Point::new(100.0, 50.0)),
        (Point::new(50.0, 0.0), Point::new(50.0, 100.0)),
    );
    let drawn = s.render_link(a).unwrap().into_path_string();
    let doc = s.to_json_value();

    s.from_json_value_strict(doc).unwrap();
    assert!(s.registered_links().is_empty());
    assert!(s.rendered_path(a).is_none());
    assert_eq!(s.render_link(a).unwrap().into_path_string(), drawn);
    assert_eq!(s.registered_links(), &[a]);
}
