//! Property-based tests for the full pipeline.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::{json, Map, Value};

    use crate::input::parse_input;
    use crate::reconstruct::reconstruct;
    use hashira_integers::{encode, Integer};
    use hashira_poly::MonicPoly;

    // (label, base, root) with distinct labels
    fn labelled_roots() -> impl Strategy<Value = Vec<(u64, u32, i128)>> {
        proptest::collection::btree_map(0u64..10_000, (2u32..=36, any::<i64>()), 0..10).prop_map(
            |m| {
                m.into_iter()
                    .map(|(label, (base, root))| (label, base, i128::from(root) * 3))
                    .collect()
            },
        )
    }

    fn document(k: u64, roots: &[(u64, u32, i128)], numeric_base: bool) -> String {
        let mut doc = Map::new();
        doc.insert("keys".into(), json!({ "n": roots.len(), "k": k }));
        for &(label, base, root) in roots {
            let value = encode(&Integer::from(root), base).unwrap();
            let base = if numeric_base {
                json!(base)
            } else {
                json!(base.to_string())
            };
            doc.insert(label.to_string(), json!({ "base": base, "value": value }));
        }
        Value::Object(doc).to_string()
    }

    proptest! {
        #[test]
        fn pipeline_matches_direct_build(
            roots in labelled_roots(),
            drop in 0usize..3,
            numeric_base in any::<bool>(),
        ) {
            let m = roots.len().saturating_sub(drop);
            let text = document(m as u64 + 1, &roots, numeric_base);

            let poly = reconstruct(&parse_input(&text).unwrap()).unwrap().unwrap();

            // btree_map yields labels ascending, which is the pipeline's order
            let values: Vec<Integer> = roots.iter().map(|&(_, _, r)| Integer::from(r)).collect();
            prop_assert_eq!(poly, MonicPoly::from_roots(&values, m).unwrap());
        }

        #[test]
        fn too_few_roots_always_fails(roots in labelled_roots(), extra in 2u64..5) {
            let text = document(roots.len() as u64 + extra, &roots, false);
            let result = reconstruct(&parse_input(&text).unwrap());
            prop_assert!(result.is_err());
        }
    }
}
