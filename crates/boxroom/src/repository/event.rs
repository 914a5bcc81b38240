use crate::{AnyId, ContainerId, ItemId, Record};
use std::sync::mpsc::Sender;

/// A change the repository has applied to the store.
///
/// Events carry the exact typed ids involved, so consumers never parse keys or
/// cast payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "event", rename_all = "snake_case"))]
pub enum RepositoryEvent {
    /// A new container was stored.
    ContainerAdded { id: ContainerId },
    /// A new item was stored, held by `container`.
    ItemAdded { id: ItemId, container: ContainerId },
    /// An existing record was replaced.
    Updated { id: AnyId },
}

impl RepositoryEvent {
    pub(crate) fn added(record: &Record) -> Self {
        match record {
            Record::Container(container) => Self::ContainerAdded { id: container.id() },
            Record::Item(item) => Self::ItemAdded {
                id: item.id(),
                container: item.container(),
            },
        }
    }

    /// Key of the record the event is about.
    pub const fn subject(&self) -> AnyId {
        match self {
            Self::ContainerAdded { id } => id.erase(),
            Self::ItemAdded { id, .. } => id.erase(),
            Self::Updated { id } => *id,
        }
    }
}

/// Receives [`RepositoryEvent`]s after the repository has applied them.
///
/// Implemented for closures and for [`std::sync::mpsc::Sender`]. Register
/// sinks with [`crate::Repository::subscribe`].
pub trait EventSink {
    fn publish(&self, event: &RepositoryEvent);
}

impl<F> EventSink for F
where
    F: Fn(&RepositoryEvent),
{
    fn publish(&self, event: &RepositoryEvent) {
        self(event);
    }
}

impl EventSink for Sender<RepositoryEvent> {
    fn publish(&self, event: &RepositoryEvent) {
        // A dropped receiver means nobody is listening any more.
        if self.send(*event).is_err() {
            #[cfg(feature = "tracing")]
            tracing::trace!(?event, "event receiver dropped");
        }
    }
}
