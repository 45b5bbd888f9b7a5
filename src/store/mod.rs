//! State containers for the application
//!
//! Two independent stores compose the app state:
//!
//! - [`ViewStore`] — ephemeral UI flags (drawer, split, loading, preference
//!   panel, theme mode)
//! - [`ModelStore`] — domain data (imported files, opened file, waveform,
//!   per-channel plot options)
//!
//! All mutation goes through a closed command enum applied by [`Store::apply`]
//! with an exhaustive `match`, so adding a command without handling it is a
//! compile error. Each applied command bumps the store's version counter;
//! the frame loop compares versions to decide whether to repaint. Commands
//! dispatched in a batch are applied synchronously, in order.
//!
//! The stores are plain structs owned by the app and passed by reference —
//! there is no global or thread-shared state here.

mod model;
mod view;

pub use model::{ModelCommand, ModelStore};
pub use view::{ViewCommand, ViewStore};

/// Common interface of the two state containers.
///
/// Binds a command type to its store so generic code (and tests) can drive
/// any store through the same dispatch surface.
pub trait Store {
    type Command;

    /// Apply a single state transition. Fire-and-forget: commands never
    /// fail and never return a result.
    fn apply(&mut self, command: Self::Command);

    /// Monotonically increasing change counter, bumped once per applied
    /// command. Used as the repaint/change signal.
    fn version(&self) -> u64;

    /// Apply a batch of commands in order
    fn dispatch_all<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = Self::Command>,
    {
        for command in commands {
            self.apply(command);
        }
    }
}
