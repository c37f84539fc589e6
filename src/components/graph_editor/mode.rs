use std::fmt;

use super::types::NodeId;

/// The tool selected in the toolbar, without any in-progress data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModeKind {
	#[default]
	Idle,
	Placing,
	Connecting,
	Disconnecting,
	Moving,
	Deleting,
}

impl fmt::Display for ModeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			ModeKind::Idle => "pan",
			ModeKind::Placing => "place",
			ModeKind::Connecting => "connect",
			ModeKind::Disconnecting => "disconnect",
			ModeKind::Moving => "move",
			ModeKind::Deleting => "delete",
		})
	}
}

/// Active editor mode. At most one is live at a time, and in-progress
/// selections belong to the mode that made them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
	#[default]
	Idle,
	Placing,
	/// `source` is the first node picked, waiting for its partner.
	Connecting { source: Option<NodeId> },
	/// Same two-pick flow as `Connecting`, removing the link instead.
	Disconnecting { source: Option<NodeId> },
	/// `node` is the node under the pointer while a drag is in progress.
	Moving { node: Option<NodeId> },
	Deleting,
}

impl Mode {
	pub fn kind(&self) -> ModeKind {
		match self {
			Mode::Idle => ModeKind::Idle,
			Mode::Placing => ModeKind::Placing,
			Mode::Connecting { .. } => ModeKind::Connecting,
			Mode::Disconnecting { .. } => ModeKind::Disconnecting,
			Mode::Moving { .. } => ModeKind::Moving,
			Mode::Deleting => ModeKind::Deleting,
		}
	}

	/// Fresh state for `kind`, with nothing selected.
	pub fn enter(kind: ModeKind) -> Self {
		match kind {
			ModeKind::Idle => Mode::Idle,
			ModeKind::Placing => Mode::Placing,
			ModeKind::Connecting => Mode::Connecting { source: None },
			ModeKind::Disconnecting => Mode::Disconnecting { source: None },
			ModeKind::Moving => Mode::Moving { node: None },
			ModeKind::Deleting => Mode::Deleting,
		}
	}

	/// Toolbar semantics: picking the active tool again turns it off,
	/// picking another one resets into it.
	pub fn transition(self, kind: ModeKind) -> Self {
		if self.kind() == kind {
			Mode::Idle
		} else {
			Mode::enter(kind)
		}
	}

	/// The node this mode is currently holding on to, if any.
	pub fn selection(&self) -> Option<NodeId> {
		match *self {
			Mode::Connecting { source } | Mode::Disconnecting { source } => source,
			Mode::Moving { node } => node,
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn selecting_active_tool_toggles_off() {
		let mode = Mode::Idle.transition(ModeKind::Placing);
		assert_eq!(mode, Mode::Placing);
		assert_eq!(mode.transition(ModeKind::Placing), Mode::Idle);
	}

	#[test]
	fn switching_tools_drops_selection() {
		let mode = Mode::Connecting {
			source: Some(NodeId(3)),
		};
		assert_eq!(mode.transition(ModeKind::Moving), Mode::Moving { node: None });
		assert_eq!(mode.transition(ModeKind::Connecting), Mode::Idle);
		assert_eq!(
			mode.transition(ModeKind::Disconnecting),
			Mode::Disconnecting { source: None }
		);
	}

	#[test]
	fn idle_transition_is_idle() {
		assert_eq!(Mode::Deleting.transition(ModeKind::Idle), Mode::Idle);
		assert_eq!(Mode::Idle.transition(ModeKind::Idle), Mode::Idle);
	}

	#[test]
	fn selection_reports_held_node() {
		assert_eq!(Mode::Moving { node: Some(NodeId(1)) }.selection(), Some(NodeId(1)));
		assert_eq!(Mode::Placing.selection(), None);
	}
}
