//! Property test: plot text round-trips arbitrary point scenes.

#![allow(clippy::unwrap_used)]

use frameviz::prelude::*;
use proptest::prelude::*;

fn color_strategy() -> impl Strategy<Value = Option<Rgba>> {
    prop_oneof![
        Just(None),
        any::<[u8; 4]>().prop_map(|arr| Some(Rgba::from_array(arr))),
    ]
}

fn entry_strategy() -> impl Strategy<Value = (Vec<(f32, f32)>, Option<Rgba>)> {
    (
        prop::collection::vec((-1.0e6f32..1.0e6, -1.0e6f32..1.0e6), 0..8),
        color_strategy(),
    )
}

proptest! {
    #[test]
    fn round_trip_preserves_entries(entries in prop::collection::vec(entry_strategy(), 0..6)) {
        let mut scene = Scene::new();
        for (points, color) in &entries {
            scene.add_points(points.iter().copied(), *color);
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.txt");
        scene.save_plot(&path).unwrap();

        let mut restored = Scene::new();
        restored.open_plot(&path).unwrap();

        // Same number of entries, each with matching color and exact
        // coordinates (float display round-trips losslessly)
        let stored = restored.points_layer().entries();
        prop_assert_eq!(stored.len(), entries.len());
        for (entry, (points, color)) in stored.iter().zip(&entries) {
            prop_assert_eq!(entry.color, *color);
            prop_assert_eq!(entry.shapes.len(), points.len());
            for (p, &(x, y)) in entry.shapes.iter().zip(points) {
                prop_assert_eq!(p.x, x);
                prop_assert_eq!(p.y, y);
            }
        }

        let second = dir.path().join("plot2.txt");
        restored.save_plot(&second).unwrap();
        prop_assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            std::fs::read_to_string(&second).unwrap()
        );
    }
}
