use crate::config::{JumpOptions, JUMPOVER_CONNECTOR};
use crate::model::{Connector, LinkId, LinkRef};

/// Links the subject may jump over, in z-order.
///
/// Links using an ignored connector are dropped. Jump-over links stacked
/// above the subject are dropped too, so a crossing between two jump-over
/// links gets a single jump, drawn by the upper one. The subject itself is
/// kept; its own lines are skipped later by id.
pub fn filter_candidates<'a>(
    links: &[LinkRef<'a>],
    subject: LinkId,
    opts: &JumpOptions,
    default_connector: Option<&Connector>,
) -> Vec<LinkRef<'a>> {
    // A subject missing from the list sits below everything.
    let subject_idx = links.iter().position(|l| l.id == subject);
    links
        .iter()
        .enumerate()
        .filter(|&(idx, l)| {
            let name = l.link.effective_connector(default_connector).map(|c| c.name.as_str());
            if name.map_or(false, |n| opts.ignores(n)) {
                return false;
            }
            let above = subject_idx.map_or(true, |s| idx > s);
            if above {
                return !name.map_or(false, |n| n == JUMPOVER_CONNECTOR);
            }
            true
        })
        .map(|(_, l)| *l)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::line::Point;
    use crate::model::Link;

    fn link(connector: Option<&str>) -> Link {
        let mut l = Link::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        l.connector = connector.map(Connector::new);
        l
    }

    fn ids(v: &[LinkRef<'_>]) -> Vec<LinkId> {
        v.iter().map(|l| l.id).collect()
    }

    #[test]
    fn drops_ignored_and_higher_jumpovers() {
        let links = [
            link(Some("jumpover")), // 0 below subject: kept
            link(Some("smooth")),   // 1 ignored
            link(Some("jumpover")), // 2 subject
            link(Some("jumpover")), // 3 above, jump-over: dropped
            link(Some("normal")),   // 4 above, plain: kept
            link(None),             // 5 above, no connector: kept
        ];
        let refs: Vec<LinkRef<'_>> =
            links.iter().enumerate().map(|(i, l)| LinkRef { id: i as LinkId, link: l }).collect();
        let out = filter_candidates(&refs, 2, &JumpOptions::default(), None);
        assert_eq!(ids(&out), vec![0, 2, 4, 5]);
    }

    #[test]
    fn default_connector_applies_to_bare_links() {
        let links = [link(Some("jumpover")), link(None)];
        let refs: Vec<LinkRef<'_>> =
            links.iter().enumerate().map(|(i, l)| LinkRef { id: i as LinkId, link: l }).collect();
        let jump_default = Connector::new("jumpover");
        let out = filter_candidates(&refs, 0, &JumpOptions::default(), Some(&jump_default));
        assert_eq!(ids(&out), vec![0]);
        let smooth_default = Connector::new("smooth");
        let out = filter_candidates(&refs, 0, &JumpOptions::default(), Some(&smooth_default));
        assert_eq!(ids(&out), vec![0]);
        let out = filter_candidates(&refs, 0, &JumpOptions::default(), None);
        assert_eq!(ids(&out), vec![0, 1]);
    }

    #[test]
    fn custom_ignore_list_replaces_default() {
        let links = [link(Some("jumpover")), link(Some("smooth")), link(Some("rounded"))];
        let refs: Vec<LinkRef<'_>> =
            links.iter().enumerate().map(|(i, l)| LinkRef { id: i as LinkId, link: l }).collect();
        let opts = JumpOptions::default().with_ignored(["rounded"]);
        let out = filter_candidates(&refs, 0, &opts, None);
        assert_eq!(ids(&out), vec![0, 1]);
    }
}
