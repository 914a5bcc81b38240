use crate::{
    AllocatorConfig, Container, ContainerId, Entity, Error, EventSink, IdAllocator,
    IdentifierSource, InsertOutcome, Item, ItemId, Kind, RepositoryEvent, Result, Store,
    StoreOracle, TypedId,
};
use core::fmt;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// The boundary between domain entities and the storage layer.
///
/// A repository owns a single [`IdentifierSource`] shared by the allocators of
/// every entity kind, and is the only component that knows how "kind + raw id"
/// becomes a store query. Container and item ids are drawn from one stream, so
/// a deterministic source never replays the same sequence for both kinds. Entities are
/// created around ids obtained from [`Self::next_container_id`] or
/// [`Self::next_item_id`], then handed to [`Self::add`].
///
/// Allocation and insertion are two separate steps with no atomicity between
/// them. Within one repository that is harmless since both take the
/// repository by reference in sequence, but a store shared between processes
/// needs a per-kind lock around "allocate, then add".
///
/// # Example
/// ```
/// use boxroom::{Container, Item, MemoryStore, Repository, ThreadRandom};
///
/// let mut repo = Repository::new(MemoryStore::new(), ThreadRandom);
///
/// let id = repo.next_container_id().unwrap();
/// repo.add(Container::new(id, "kitchen")).unwrap();
///
/// let item = repo.create_item(id, "kettle").unwrap();
/// let kitchen = repo.by_id(id).unwrap().unwrap();
/// assert_eq!(kitchen.items(), [item.id()]);
/// ```
pub struct Repository<S, R>
where
    S: Store,
    R: IdentifierSource,
{
    store: S,
    source: R,
    config: AllocatorConfig,
    sinks: Vec<Box<dyn EventSink>>,
}

impl<S, R> Repository<S, R>
where
    S: Store,
    R: IdentifierSource,
{
    /// Creates a repository over `store` drawing ids from `source`, with no
    /// attempt ceiling.
    pub fn new(store: S, source: R) -> Self {
        Self::with_config(store, source, AllocatorConfig::UNBOUNDED)
    }

    /// Like [`Self::new`], applying `config` to the allocation of every kind.
    pub fn with_config(store: S, source: R, config: AllocatorConfig) -> Self {
        Self {
            store,
            source,
            config,
            sinks: Vec::new(),
        }
    }

    /// Registers a sink that receives every event this repository emits.
    pub fn subscribe(&mut self, sink: impl EventSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the repository, handing back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// An allocator for kind `K` over the shared source.
    fn allocator<K: Kind>(&self) -> IdAllocator<K, impl IdentifierSource + '_> {
        let source = &self.source;
        IdAllocator::with_config(move || source.generate(), self.config)
    }

    /// Allocates a container id that is not in the store right now.
    ///
    /// # Errors
    /// - [`Error::Store`] if the store cannot be queried.
    /// - [`Error::AllocationExhausted`] if a ceiling is configured and reached.
    pub fn next_container_id(&self) -> Result<ContainerId, S::Error> {
        self.allocator::<Container>()
            .try_next_id(&StoreOracle::<S, Container>::new(&self.store))
    }

    /// Allocates an item id that is not in the store right now.
    ///
    /// # Errors
    /// - [`Error::Store`] if the store cannot be queried.
    /// - [`Error::AllocationExhausted`] if a ceiling is configured and reached.
    pub fn next_item_id(&self) -> Result<ItemId, S::Error> {
        self.allocator::<Item>()
            .try_next_id(&StoreOracle::<S, Item>::new(&self.store))
    }

    /// Inserts a fully constructed entity and notifies subscribers.
    ///
    /// # Errors
    /// Returns [`Error::Store`] if the store cannot be written.
    ///
    /// # Panics
    /// Panics if a record of the same kind with the same id is already stored.
    /// Ids must come from this repository's allocator; a duplicate means that
    /// rule was bypassed, and the stored record is left untouched.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip_all))]
    pub fn add<E: Entity>(&mut self, entity: E) -> Result<(), S::Error> {
        let id = entity.id();
        let record = entity.into();
        let event = RepositoryEvent::added(&record);

        match self.store.insert(record).map_err(Error::Store)? {
            InsertOutcome::Inserted => {}
            InsertOutcome::AlreadyExists => panic!(
                "duplicate {} id {id}: ids must be allocated by the repository",
                E::TAG
            ),
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(id = %id.erase(), "record added");
        self.publish(&event);
        Ok(())
    }

    /// Writes back a mutated entity that is already stored.
    ///
    /// # Errors
    /// - [`Error::NotFound`] if no record with the entity's id exists.
    /// - [`Error::Store`] if the store cannot be written.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip_all))]
    pub fn save<E: Entity>(&mut self, entity: E) -> Result<(), S::Error> {
        let id = entity.id().erase();
        if !self.store.update(entity.into()).map_err(Error::Store)? {
            return Err(Error::NotFound(id));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(%id, "record updated");
        self.publish(&RepositoryEvent::Updated { id });
        Ok(())
    }

    /// Fetches the entity with `id`, if stored.
    ///
    /// # Errors
    /// Returns [`Error::Store`] if the store cannot be queried.
    pub fn by_id<E: Entity>(&self, id: TypedId<E>) -> Result<Option<E>, S::Error> {
        Ok(self
            .store
            .get(id.erase())
            .map_err(Error::Store)?
            .and_then(E::from_record))
    }

    /// Fetches every stored entity of kind `E`, in insertion order.
    ///
    /// # Errors
    /// Returns [`Error::Store`] if the store cannot be queried.
    pub fn all<E: Entity>(&self) -> Result<Vec<E>, S::Error> {
        Ok(self
            .store
            .all(E::TAG)
            .map_err(Error::Store)?
            .into_iter()
            .filter_map(E::from_record)
            .collect())
    }

    /// Fetches the items held by `container`, in the container's order.
    ///
    /// # Errors
    /// - [`Error::NotFound`] if the container references an item that is not
    ///   stored.
    /// - [`Error::Store`] if the store cannot be queried.
    pub fn items_of(&self, container: &Container) -> Result<Vec<Item>, S::Error> {
        container
            .items()
            .iter()
            .map(|&id| self.by_id(id)?.ok_or(Error::NotFound(id.erase())))
            .collect()
    }

    /// Allocates an id, builds an empty container around it, and stores it.
    ///
    /// # Errors
    /// See [`Self::next_container_id`] and [`Self::add`].
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self, title)))]
    pub fn create_container(&mut self, title: impl Into<String>) -> Result<Container, S::Error> {
        let container = Container::new(self.next_container_id()?, title);
        self.add(container.clone())?;
        Ok(container)
    }

    /// Allocates an id, builds an item held by `container`, stores it, and
    /// appends it to the container's collection.
    ///
    /// # Errors
    /// - [`Error::NotFound`] if `container` is not stored; nothing is
    ///   allocated or written in that case.
    /// - See [`Self::next_item_id`], [`Self::add`] and [`Self::save`].
    ///
    /// The item is stored before the container is written back. If that final
    /// write fails, the item stays in the store but is not listed by its
    /// container; retrying with [`Self::save`] on an updated container, or
    /// removing the item, is left to the caller.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self, title)))]
    pub fn create_item(
        &mut self,
        container: ContainerId,
        title: impl Into<String>,
    ) -> Result<Item, S::Error> {
        let mut owner = self
            .by_id(container)?
            .ok_or(Error::NotFound(container.erase()))?;

        let item = Item::new(self.next_item_id()?, title, container);
        self.add(item.clone())?;

        owner.add_item(item.id());
        self.save(owner)?;
        Ok(item)
    }

    fn publish(&self, event: &RepositoryEvent) {
        for sink in &self.sinks {
            sink.publish(event);
        }
    }
}

impl<S, R> fmt::Debug for Repository<S, R>
where
    S: Store + fmt::Debug,
    R: IdentifierSource + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("store", &self.store)
            .field("source", &self.source)
            .field("config", &self.config)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
