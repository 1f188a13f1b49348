use jumpover::{Connector, Point, Surface};
use serde_json::json;

fn gap() -> Option<Connector> {
    Some(Connector::jumpover(json!({ "jump": "gap" })))
}

#[test]
fn batch_complete_redraws_registered_links_in_order() {
    let mut s = Surface::new();
    let h = s.add_link(Point::new(0.0, 50.0), Point::new(100.0, 50.0)).unwrap();
    let v = s.add_link(Point::new(50.0, 0.0), Point::new(50.0, 100.0)).unwrap();
    let plain = s.add_link(Point::new(200.0, 0.0), Point::new(200.0, 100.0)).unwrap();
    s.set_connector(v, gap()).unwrap();
    s.set_connector(h, gap()).unwrap();

    s.render_link(v).unwrap();
    s.render_link(h).unwrap();
    s.render_link(plain).unwrap();
    assert_eq!(s.registered_links(), &[v, h]);
    // v sits above h, so v jumps and h stays straight
    assert_eq!(s.rendered_path(h), Some("M 0 50 L 100 50"));
    assert_eq!(s.rendered_path(v), Some("M 50 0 L 50 45 M 50 55 L 50 100"));

    // drag the plain link across h
    s.set_link_endpoints(plain, Point::new(30.0, 0.0), Point::new(30.0, 100.0)).unwrap();
    assert_eq!(s.rendered_path(h), Some("M 0 50 L 100 50"), "nothing redraws mid-drag");
    let updated = s.batch_complete();
    assert_eq!(updated, vec![v, h]);
    assert_eq!(s.rendered_path(h), Some("M 0 50 L 25 50 M 35 50 L 100 50"));
    // plain links are not tracked
    assert_eq!(s.rendered_path(plain), Some("M 200 0 L 200 100"));
}

#[test]
fn removed_links_stop_updating_and_stop_being_crossed() {
    let mut s = Surface::new();
    let h = s.add_link(Point::new(0.0, 50.0), Point::new(100.0, 50.0)).unwrap();
    let v = s.add_link(Point::new(50.0, 0.0), Point::new(50.0, 100.0)).unwrap();
    s.set_connector(h, gap()).unwrap();
    s.render_link(h).unwrap();
    assert_eq!(s.rendered_path(h), Some("M 0 50 L 45 50 M 55 50 L 100 50"));

    assert!(s.remove_link(v));
    assert_eq!(s.batch_complete(), vec![h]);
    assert_eq!(s.rendered_path(h), Some("M 0 50 L 100 50"));

    assert!(s.remove_link(h));
    assert!(s.batch_complete().is_empty());
}

#[test]
fn default_connector_links_register_on_first_render() {
    let mut s = Surface::new();
    s.set_default_connector(Some(Connector::jumpover(json!(null)))).unwrap();
    let a = s.add_link(Point::new(0.0, 0.0), Point::new(10.0, 0.0)).unwrap();
    assert!(s.registered_links().is_empty());
    s.render_link(a).unwrap();
    s.render_link(a).unwrap();
    assert_eq!(s.registered_links(), &[a]);
}

#[test]
fn reset_forgets_everything() {
    let mut s = Surface::new();
    let a = s.add_link(Point::new(0.0, 0.0), Point::new(10.0, 0.0)).unwrap();
    s.set_connector(a, gap()).unwrap();
    s.render_link(a).unwrap();
    let ver = s.geom_version();
    s.reset();
    assert!(s.geom_version() > ver);
    assert!(s.registered_links().is_empty());
    assert!(s.batch_complete().is_empty());
    assert!(s.rendered_path(a).is_none());
}

#[test]
fn recomputation_is_deterministic() {
    let mut s = Surface::new();
    let ids: Vec<u32> = (0..6)
        .map(|i| {
            let f = i as f64 * 17.0;
            s.add_link(Point::new(f, 0.0), Point::new(100.0 - f, 100.0)).unwrap()
        })
        .collect();
    // every connector in place before the first draw, so the first pass
    // sees the same peers as the batch updates
    for &id in &ids {
        s.set_connector(id, Some(Connector::jumpover(json!({ "jump": "cubic", "size": 3 })))).unwrap();
    }
    for &id in &ids {
        s.render_link(id).unwrap();
    }
    let first: Vec<String> = ids.iter().map(|&id| s.rendered_path(id).unwrap().to_string()).collect();
    s.batch_complete();
    s.batch_complete();
    let second: Vec<String> = ids.iter().map(|&id| s.rendered_path(id).unwrap().to_string()).collect();
    assert_eq!(first, second);
}
