use std::collections::HashMap;

use super::graph::Graph;

/// Generated text plus the filename it should be saved under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
	pub text: String,
	pub filename: String,
}

/// Flattens the connection list into `name,neighbor,...` rows.
///
/// Rows appear in the order their node is first met while walking the
/// connections in creation order, and each row lists neighbours in that same
/// order. Rows are keyed by display name, so distinct nodes sharing a name
/// end up merged in one row. Names are written unescaped.
pub fn to_adjacency_text(graph: &Graph) -> String {
	let mut rows: Vec<(&str, Vec<&str>)> = Vec::new();
	let mut index: HashMap<&str, usize> = HashMap::new();

	for connection in graph.connections() {
		let (Some(u), Some(v)) = (
			graph.node(connection.source),
			graph.node(connection.destination),
		) else {
			continue;
		};
		for (from, to) in [(u.name.as_str(), v.name.as_str()), (v.name.as_str(), u.name.as_str())] {
			let row = *index.entry(from).or_insert_with(|| {
				rows.push((from, Vec::new()));
				rows.len() - 1
			});
			rows[row].1.push(to);
		}
	}

	let mut out = String::new();
	for (name, neighbors) in rows {
		out.push_str(name);
		for neighbor in neighbors {
			out.push(',');
			out.push_str(neighbor);
		}
		out.push('\n');
	}
	out
}
