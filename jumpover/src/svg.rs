use crate::Surface;

pub fn to_svg_paths_impl(s: &Surface) -> Vec<String> {
    s.links_in_z_order()
        .iter()
        .filter_map(|r| match s.compute_path(r.id) {
            Ok((data, _)) => Some(data.into_path_string()),
            Err(e) => {
                tracing::warn!(link = r.id, error = %e, "skipping link in svg export");
                None
            }
        })
        .collect()
}
