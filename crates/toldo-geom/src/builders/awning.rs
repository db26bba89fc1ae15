//! Fixed and retractable awnings.

use super::{flags, sloped_box, support_posts, Shape, TOP_FACE};
use toldo_ir::{Cassette, Face, Feature, Structure};

/// Rails sit this far below the front edge.
const RAIL_DROP: f64 = 0.2;

/// Cassette box depth and height `[y, z]`.
const CASSETTE_SECTION: [f64; 2] = [0.3, 0.2];

/// Fabric on top plus the four side walls of a [`sloped_box`].
fn awning_faces() -> Vec<Face> {
    vec![
        TOP_FACE.to_vec(),
        vec![0, 1, 5, 4], // front
        vec![2, 3, 7, 6], // back
        vec![1, 2, 6, 5], // right
        vec![3, 0, 4, 7], // left
    ]
}

/// Fixed awning: a box whose roof falls toward the back, with the fabric on
/// top and four side walls, standing on support posts.
pub fn fixed_awning(width: f64, length: f64, height: f64, angle: f64) -> Shape {
    Shape {
        vertices: sloped_box(width, length, height, angle),
        faces: awning_faces(),
        features: flags(&[
            ("retractable", false),
            ("motorized", false),
            ("angle_adjustable", false),
        ]),
        structure: Structure::FixedAwning {
            support_structure: support_posts(width, length, height),
        },
    }
}

/// Retractable awning: the fixed awning plus side rails and a front
/// cassette.
pub fn retractable_awning(width: f64, length: f64, height: f64, angle: f64) -> Shape {
    let rail_height = height - RAIL_DROP;
    let rails = vec![
        [[0.0, 0.0, rail_height], [0.0, length, rail_height]],
        [[width, 0.0, rail_height], [width, length, rail_height]],
    ];
    let cassette = Cassette {
        position: [width / 2.0, 0.0, height],
        dimensions: [width, CASSETTE_SECTION[0], CASSETTE_SECTION[1]],
    };

    let mut features = flags(&[
        ("retractable", true),
        ("motorized", true),
        ("angle_adjustable", true),
    ]);
    features.insert("extension_range".into(), Feature::Range([0.0, length]));

    Shape {
        vertices: sloped_box(width, length, height, angle),
        faces: awning_faces(),
        features,
        structure: Structure::RetractableAwning {
            support_structure: support_posts(width, length, height),
            rails,
            cassette,
        },
    }
}
