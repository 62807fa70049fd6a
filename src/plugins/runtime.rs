use std::sync::Mutex;

/// Live connection to a running plugin subprocess.
///
/// Implemented by the plugin-hosting runtime; this crate only needs enough
/// surface to disconnect everything at shutdown.
pub trait PluginClient: Send {
    fn name(&self) -> &str;

    /// Terminate the subprocess and drop the connection.
    fn shutdown(&self);
}

/// Registry of live plugin clients.
///
/// Owned by the top-level process context and populated on each plugin
/// launch; [`cleanup_all`](Self::cleanup_all) drains it once near process
/// exit. Calling it again, or with nothing registered, is a no-op.
#[derive(Default)]
pub struct ClientRegistry {
    clients: Mutex<Vec<Box<dyn PluginClient>>>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a freshly launched plugin client.
    pub fn register(&self, client: Box<dyn PluginClient>) {
        self.lock().push(client);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Tear down and disconnect all tracked plugin clients.
    pub fn cleanup_all(&self) {
        let drained: Vec<Box<dyn PluginClient>> = self.lock().drain(..).collect();

        tracing::debug!(clients = drained.len(), "tearing down plugins before exit");
        for client in drained {
            tracing::debug!(plugin = client.name(), "disconnecting plugin client");
            client.shutdown();
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Box<dyn PluginClient>>> {
        // A client's shutdown is infallible from this side; a poisoned lock
        // still holds a usable list.
        match self.clients.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl std::fmt::Debug for ClientRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientRegistry")
            .field("clients", &self.len())
            .finish()
    }
}
