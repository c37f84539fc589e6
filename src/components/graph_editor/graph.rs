//! In-memory node/connection model.
//!
//! Nodes live in a single vector whose order doubles as z-order: the last
//! node is drawn on top and wins hit tests. Connections are kept in creation
//! order, which the adjacency export relies on.

use std::collections::BTreeSet;

use log::debug;

use super::types::{ConnectionId, NodeId, Point};

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	id: NodeId,
	pub name: String,
	pub position: Point,
	outgoing: Vec<ConnectionId>,
	adjacent: BTreeSet<NodeId>,
}

impl Node {
	pub fn id(&self) -> NodeId {
		self.id
	}

	/// Connections this node initiated, in creation order.
	pub fn outgoing(&self) -> &[ConnectionId] {
		&self.outgoing
	}

	/// Every node connected to this one, regardless of direction.
	pub fn adjacent(&self) -> &BTreeSet<NodeId> {
		&self.adjacent
	}
}

/// An undirected link that remembers which end initiated it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connection {
	pub id: ConnectionId,
	pub source: NodeId,
	pub destination: NodeId,
}

impl Connection {
	pub fn touches(&self, node: NodeId) -> bool {
		self.source == node || self.destination == node
	}

	fn joins(&self, a: NodeId, b: NodeId) -> bool {
		(self.source == a && self.destination == b) || (self.source == b && self.destination == a)
	}
}

#[derive(Clone, Debug, Default)]
pub struct Graph {
	nodes: Vec<Node>,
	connections: Vec<Connection>,
	next_node: u32,
	next_connection: u32,
}

impl Graph {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn connection_count(&self) -> usize {
		self.connections.len()
	}

	/// Nodes bottom to top.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// Connections in creation order.
	pub fn connections(&self) -> &[Connection] {
		&self.connections
	}

	pub fn node(&self, id: NodeId) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
		self.nodes.iter_mut().find(|n| n.id == id)
	}

	pub fn contains(&self, id: NodeId) -> bool {
		self.node(id).is_some()
	}

	/// Appends a node on top of the z-order.
	pub fn add_node(&mut self, position: Point, name: impl Into<String>) -> NodeId {
		let id = NodeId(self.next_node);
		self.next_node += 1;
		self.nodes.push(Node {
			id,
			name: name.into(),
			position,
			outgoing: Vec::new(),
			adjacent: BTreeSet::new(),
		});
		id
	}

	pub fn is_connected(&self, a: NodeId, b: NodeId) -> bool {
		self.node(a).is_some_and(|n| n.adjacent.contains(&b))
	}

	pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
		self.node(id).into_iter().flat_map(|n| n.adjacent.iter().copied())
	}

	/// Connects `source` to `destination` unless they already share a
	/// connection in either direction. Self-connections and unknown ids are
	/// refused; every refusal leaves the graph untouched.
	pub fn add_connection(&mut self, source: NodeId, destination: NodeId) -> Option<ConnectionId> {
		if source == destination {
			debug!("refusing self-connection on {source}");
			return None;
		}
		if !self.contains(source) || !self.contains(destination) {
			debug!("refusing connection {source} -> {destination}: unknown node");
			return None;
		}
		if self.is_connected(source, destination) {
			debug!("{source} and {destination} are already connected");
			return None;
		}

		let id = ConnectionId(self.next_connection);
		self.next_connection += 1;
		self.connections.push(Connection {
			id,
			source,
			destination,
		});
		if let Some(n) = self.node_mut(source) {
			n.outgoing.push(id);
			n.adjacent.insert(destination);
		}
		if let Some(n) = self.node_mut(destination) {
			n.adjacent.insert(source);
		}
		Some(id)
	}

	/// Removes the connection between `a` and `b`, whichever of them initiated it.
	pub fn disconnect(&mut self, a: NodeId, b: NodeId) -> bool {
		let Some(pos) = self.connections.iter().position(|c| c.joins(a, b)) else {
			return false;
		};
		let removed = self.connections.remove(pos);
		self.unlink(&removed);
		true
	}

	/// Drops every connection touching `node`, returning how many went.
	pub fn remove_connections_for(&mut self, node: NodeId) -> usize {
		let (removed, kept): (Vec<_>, Vec<_>) = self
			.connections
			.drain(..)
			.partition(|c| c.touches(node));
		self.connections = kept;
		for c in &removed {
			self.unlink(c);
		}
		removed.len()
	}

	fn unlink(&mut self, connection: &Connection) {
		if let Some(n) = self.node_mut(connection.source) {
			n.outgoing.retain(|&c| c != connection.id);
			n.adjacent.remove(&connection.destination);
		}
		if let Some(n) = self.node_mut(connection.destination) {
			n.adjacent.remove(&connection.source);
		}
	}

	/// Deletes a node and everything connected to it. Absent ids are a no-op.
	pub fn delete_node(&mut self, id: NodeId) -> Option<Node> {
		let pos = self.nodes.iter().position(|n| n.id == id)?;
		self.remove_connections_for(id);
		Some(self.nodes.remove(pos))
	}

	/// Overwrites the position; connection geometry is derived at draw time.
	pub fn move_node(&mut self, id: NodeId, position: Point) -> bool {
		match self.node_mut(id) {
			Some(n) => {
				n.position = position;
				true
			}
			None => false,
		}
	}

	/// Moves a node to the top of the z-order.
	pub fn raise(&mut self, id: NodeId) -> bool {
		let Some(pos) = self.nodes.iter().position(|n| n.id == id) else {
			return false;
		};
		let node = self.nodes.remove(pos);
		self.nodes.push(node);
		true
	}
}
