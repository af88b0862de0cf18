use std::{
    any::{TypeId, type_name},
    collections::BTreeMap,
};

use flume::{Receiver, Sender};
use log::{debug, error, warn};
use tokio_util::sync::CancellationToken;

use crate::{
    Command, CommandFuture, CommandSnapshot, Compute, Dep, Error, Graph, State, StateSyncStatus,
    TaskHandle, TaskId, TopologyError, UpdateMessage, Updater,
};

/// Owns every state, compute and command of the application.
///
/// A frame usually looks like:
/// 1. `sync_computes()` applies values posted by commands/computes;
/// 2. the UI reads with `state`/`cached` and writes with `update`/`dispatch`;
/// 3. `run_computed()` re-derives dirty computes in dependency order;
/// 4. `flush_commands()` starts dispatched commands.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,

    status: BTreeMap<TypeId, StateSyncStatus>,
    graph: Graph<TypeId>,
    // computes in dependency order
    order: Vec<TypeId>,

    pending_commands: Vec<TypeId>,
    tasks: BTreeMap<TypeId, TaskHandle>,
    generation: u64,

    send: Sender<UpdateMessage>,
    recv: Receiver<UpdateMessage>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("pending_commands", &self.pending_commands.len())
            .field("tasks", &self.tasks.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();

        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            status: BTreeMap::new(),
            graph: Graph::new(),
            order: Vec::new(),
            pending_commands: Vec::new(),
            tasks: BTreeMap::new(),
            generation: 0,
            send,
            recv,
        }
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        if self.states.insert(id, Box::new(state)).is_some() {
            debug!("Replaced state {}", type_name::<T>());
        }
        self.mark_dependents_dirty(id);
    }

    /// Registers a compute. It starts in [`StateSyncStatus::Init`] and is evaluated by the
    /// next `run_computed`.
    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        let (state_deps, compute_deps) = compute.deps();
        for dep in state_deps.into_iter().chain(compute_deps) {
            self.graph.route_to(dep, id);
        }
        self.computes.insert(id, Box::new(compute));
        self.status.insert(id, StateSyncStatus::Init);

        if let Err(err) = self.refresh_order() {
            error!("Recording {} broke the dependency graph: {err}", type_name::<T>());
        }
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    /// Checks that the recorded computes form a DAG.
    pub fn verify_deps(&self) -> Result<(), TopologyError<TypeId>> {
        self.graph.topology_sort().map(|_| ())
    }

    fn refresh_order(&mut self) -> Result<(), TopologyError<TypeId>> {
        let sorted = self.graph.topology_sort()?;
        let mut order: Vec<TypeId> = self
            .computes
            .keys()
            .filter(|id| !sorted.contains(id))
            .copied()
            .collect();
        order.extend(sorted.into_iter().filter(|id| self.computes.contains_key(id)));
        self.order = order;
        Ok(())
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }

    /// # Panics
    /// Panics if `T` was never added with `add_state`.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutable access without dirty propagation; prefer [`StateCtx::update`].
    ///
    /// # Panics
    /// Panics if `T` was never added with `add_state`.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("{}", Error::state_not_found::<T>()))
    }

    /// Mutates a state and marks every compute reading it dirty.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
        self.mark_dependents_dirty(TypeId::of::<T>());
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
    }

    pub fn status<T: Compute>(&self) -> Option<StateSyncStatus> {
        self.status.get(&TypeId::of::<T>()).copied()
    }

    pub fn mark_dirty(&mut self, id: &TypeId) {
        if let Some(status) = self.status.get_mut(id) {
            *status = StateSyncStatus::Dirty;
        }
    }

    pub fn mark_clean(&mut self, id: &TypeId) {
        if let Some(status) = self.status.get_mut(id) {
            *status = StateSyncStatus::Clean;
        }
    }

    fn mark_dependents_dirty(&mut self, id: TypeId) {
        let dependents: Vec<TypeId> = self.graph.successors(id).collect();
        for dependent in &dependents {
            self.mark_dirty(dependent);
        }
    }

    /// Applies every value posted through an [`Updater`] since the last call.
    pub fn sync_computes(&mut self) {
        while let Ok((id, value)) = self.recv.try_recv() {
            if let Some(compute) = self.computes.get_mut(&id) {
                compute.assign_box(value);
                self.mark_clean(&id);
            } else if let Some(state) = self.states.get_mut(&id) {
                state.assign_box(value);
            } else {
                warn!("Dropping update for unregistered type {id:?}");
                continue;
            }
            self.mark_dependents_dirty(id);
        }
    }

    /// Evaluates dirty computes in dependency order.
    ///
    /// Updates are synced after each compute so its dependents see the new value within
    /// the same pass.
    pub fn run_computed(&mut self) {
        for id in self.order.clone() {
            let needs_compute = self
                .status
                .get(&id)
                .is_some_and(|status| status.needs_compute());
            if !needs_compute {
                continue;
            }
            let Some(compute) = self.computes.remove(&id) else {
                continue;
            };
            compute.compute(Dep::new(&self.states, &self.computes), self.updater());
            self.computes.insert(id, compute);
            self.mark_clean(&id);
            self.sync_computes();
        }
    }

    /// Queues a command; it starts on the next `flush_commands`.
    pub fn dispatch<T: Command>(&mut self) {
        let id = TypeId::of::<T>();
        if self.commands.contains_key(&id) {
            self.pending_commands.push(id);
        } else {
            error!("{}", Error::command_not_found::<T>());
        }
    }

    pub fn has_pending_commands(&self) -> bool {
        !self.pending_commands.is_empty()
    }

    /// Starts queued commands. A command of the same type that is still running is
    /// cancelled first.
    pub fn flush_commands(&mut self) {
        for id in std::mem::take(&mut self.pending_commands) {
            let Some(command) = self.commands.get(&id) else {
                continue;
            };

            if let Some(previous) = self.tasks.remove(&id) {
                debug!("Cancelling task {:?}", previous.id());
                previous.cancel();
            }

            self.generation += 1;
            let handle = TaskHandle::new(TaskId::new(id, self.generation), CancellationToken::new());
            let future = command.run(
                self.snapshot(),
                Updater::new(self.send.clone()),
                handle.cancellation_token(),
            );
            if spawn(future) {
                self.tasks.insert(id, handle);
            }
        }
    }

    pub fn task<T: Command>(&self) -> Option<&TaskHandle> {
        self.tasks.get(&TypeId::of::<T>())
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, state) in &self.states {
            if let Some(value) = state.snapshot() {
                snap.insert(*id, value);
            }
        }
        for (id, compute) in &self.computes {
            if let Some(value) = compute.snapshot() {
                snap.insert(*id, value);
            }
        }
        snap
    }
}

impl Drop for StateCtx {
    fn drop(&mut self) {
        for task in self.tasks.values() {
            task.cancel();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn(future: CommandFuture) -> bool {
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            drop(handle.spawn(future));
            true
        }
        Err(err) => {
            error!("Cannot start command outside a tokio runtime: {err}");
            false
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn spawn(future: CommandFuture) -> bool {
    wasm_bindgen_futures::spawn_local(future);
    true
}
