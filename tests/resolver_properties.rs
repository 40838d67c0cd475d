//! Property tests for closure resolution over random component graphs.

mod common;

use std::collections::HashSet;

use proptest::prelude::*;

use common::TestProject;
use sf_registry::operations::PackOperation;
use sf_registry::ArtifactKey;

fn component_name(i: usize) -> String {
    format!("c{i}")
}

/// Write one component per adjacency list, importing its targets in order
fn write_graph(project: &TestProject, edges: &[Vec<usize>]) {
    for (i, targets) in edges.iter().enumerate() {
        let imports: String = targets
            .iter()
            .enumerate()
            .map(|(n, t)| format!("import Dep{n} from 'c/{}';\n", component_name(*t)))
            .collect();
        let script = format!("{imports}export default class {{}}\n");
        project.component(&component_name(i), &[("js", script.as_str())]);
    }
}

/// Depth-first preorder over the deduplicated edges, ignoring self edges
fn expected_order(edges: &[Vec<usize>]) -> Vec<String> {
    fn visit(node: usize, edges: &[Vec<usize>], seen: &mut HashSet<usize>, out: &mut Vec<String>) {
        if !seen.insert(node) {
            return;
        }
        out.push(component_name(node));
        for &next in &edges[node] {
            if next != node {
                visit(next, edges, seen, out);
            }
        }
    }
    let mut out = Vec::new();
    visit(0, edges, &mut HashSet::new(), &mut out);
    out
}

fn graph() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..7).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(0..n, 0..4), n)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the closure lists every reachable component once, root first, in DFS preorder.
    #[test]
    fn property_closure_is_preorder_of_reachable_set(edges in graph()) {
        let project = TestProject::new();
        write_graph(&project, &edges);
        let layout = project.layout();
        let operation = PackOperation::new(&layout).unwrap();

        let root = ArtifactKey::component(component_name(0));
        let closure = operation.resolve(&root, Some("1.0.0")).unwrap();
        let manifest = closure.manifest();

        let names: Vec<String> = manifest.iter().map(|e| e.name.clone()).collect();
        let unique: HashSet<&String> = names.iter().collect();
        prop_assert_eq!(unique.len(), names.len(), "duplicate entries in {:?}", names);
        prop_assert_eq!(&names, &expected_order(&edges));

        prop_assert_eq!(manifest[0].version.as_deref(), Some("1.0.0"));
        prop_assert!(manifest[1..].iter().all(|e| e.version.is_none()));

        // Every dependency named by an entry is itself in the closure.
        for entry in &manifest {
            for dependency in &entry.dependencies {
                prop_assert!(unique.contains(&dependency.name));
                prop_assert_ne!(&dependency.name, &entry.name);
            }
        }
    }

    /// PROPERTY: resolving twice yields the same manifest.
    #[test]
    fn property_resolution_is_deterministic(edges in graph()) {
        let project = TestProject::new();
        write_graph(&project, &edges);
        let layout = project.layout();
        let operation = PackOperation::new(&layout).unwrap();

        let root = ArtifactKey::component(component_name(0));
        let first = operation.resolve(&root, None).unwrap().manifest();
        let second = operation.resolve(&root, None).unwrap().manifest();
        prop_assert_eq!(first, second);
    }
}
