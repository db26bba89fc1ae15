//! Per-product geometry builders.
//!
//! Each builder returns a [`Shape`]: mesh, capability flags and the
//! auxiliary structure specific to that product. Shared pieces (the sloped
//! box and support posts) live here.

mod awning;
mod cover;
mod generic;
mod pergola;
mod tent;

pub use awning::{fixed_awning, retractable_awning};
pub use cover::polycarbonate_cover;
pub use generic::generic_structure;
pub use pergola::pergola;
pub use tent::tent;

use crate::math::slope_drop;
use toldo_ir::{Face, Feature, Features, Structure, SupportPost, Vertex};

/// Support post diameter in meters.
pub const POST_DIAMETER: f64 = 0.08;

/// Material tag of support posts.
pub const POST_MATERIAL: &str = "aluminum";

/// Widths above this get mid-span posts.
pub const MIDPOST_WIDTH: f64 = 4.0;

/// Result of a single builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    /// Mesh vertices.
    pub vertices: Vec<Vertex>,
    /// Mesh faces.
    pub faces: Vec<Face>,
    /// Product capability flags.
    pub features: Features,
    /// Auxiliary structural elements.
    pub structure: Structure,
}

/// Eight corners of a box whose back-top edge drops with the roof slope.
///
/// ```text
///     v7----v6        z
///    /|    /|         | y
///   v4----v5|         |/
///   | v3--|-v2        +---x
///   |/    |/
///   v0----v1
/// ```
///
/// `v0..v3` sit on the ground; `v6` and `v7` (at `y = length`) are lowered
/// by `length * tan(angle)`.
pub(crate) fn sloped_box(width: f64, length: f64, height: f64, angle: f64) -> Vec<Vertex> {
    let back = height - slope_drop(length, angle);
    vec![
        [0.0, 0.0, 0.0],
        [width, 0.0, 0.0],
        [width, length, 0.0],
        [0.0, length, 0.0],
        [0.0, 0.0, height],
        [width, 0.0, height],
        [width, length, back],
        [0.0, length, back],
    ]
}

/// Roof of [`sloped_box`], wound so its normal points up.
pub(crate) const TOP_FACE: [usize; 4] = [4, 5, 6, 7];

/// Posts at the four base corners, plus two at mid-width on the front and
/// back edges when the structure is wider than [`MIDPOST_WIDTH`].
pub fn support_posts(width: f64, length: f64, height: f64) -> Vec<SupportPost> {
    let post = |x: f64, y: f64| SupportPost {
        position: [x, y, 0.0],
        height,
        diameter: POST_DIAMETER,
        material: POST_MATERIAL.to_string(),
    };

    let mut posts = vec![
        post(0.0, 0.0),
        post(width, 0.0),
        post(width, length),
        post(0.0, length),
    ];
    if width > MIDPOST_WIDTH {
        posts.push(post(width / 2.0, 0.0));
        posts.push(post(width / 2.0, length));
    }
    posts
}

/// Build a feature map of boolean flags.
pub(crate) fn flags(pairs: &[(&str, bool)]) -> Features {
    pairs
        .iter()
        .map(|&(name, on)| (name.to_string(), Feature::Flag(on)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_structure_has_corner_posts_only() {
        let posts = support_posts(4.0, 3.0, 2.5);
        assert_eq!(posts.len(), 4);
        assert!(posts.iter().all(|p| p.diameter == POST_DIAMETER));
        assert!(posts.iter().all(|p| p.material == POST_MATERIAL));
        assert!(posts.iter().all(|p| p.height == 2.5));
    }

    #[test]
    fn wide_structure_gets_midposts() {
        let posts = support_posts(5.0, 3.0, 2.5);
        assert_eq!(posts.len(), 6);
        assert_eq!(posts[4].position, [2.5, 0.0, 0.0]);
        assert_eq!(posts[5].position, [2.5, 3.0, 0.0]);
    }

    #[test]
    fn sloped_box_lowers_back_edge() {
        let v = sloped_box(3.0, 4.0, 2.5, 10.0);
        let drop = 4.0 * 10f64.to_radians().tan();
        assert_eq!(v[4][2], 2.5);
        assert_eq!(v[5][2], 2.5);
        assert_eq!(v[6][2], 2.5 - drop);
        assert_eq!(v[7][2], 2.5 - drop);
    }
}
