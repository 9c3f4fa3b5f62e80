use std::path::PathBuf;

use crate::events::DemoEvent;

/// Receives raw events for later inspection while developing.
pub trait DebugSink {
    fn dump(&mut self, event: &DemoEvent) -> std::io::Result<()>;
}

impl DebugSink for Vec<DemoEvent> {
    fn dump(&mut self, event: &DemoEvent) -> std::io::Result<()> {
        self.push(event.clone());
        Ok(())
    }
}

/// Writes every dumped event into its own numbered file.
pub struct DumpDirectory {
    folder: PathBuf,
    prefix: String,
    index: usize,
}

impl DumpDirectory {
    pub fn create<P>(folder: P, prefix: impl Into<String>) -> std::io::Result<Self>
    where
        P: Into<PathBuf>,
    {
        let folder = folder.into();
        std::fs::create_dir_all(&folder)?;

        Ok(Self {
            folder,
            prefix: prefix.into(),
            index: 0,
        })
    }

    pub fn dumped(&self) -> usize {
        self.index
    }
}

impl DebugSink for DumpDirectory {
    fn dump(&mut self, event: &DemoEvent) -> std::io::Result<()> {
        self.index += 1;

        let path = self
            .folder
            .join(format!("{}_{}.dump", self.prefix, self.index));
        let data = serde_json::to_vec_pretty(event).map_err(std::io::Error::other)?;

        tracing::trace!(?path, "Dumping event");
        std::fs::write(path, data)
    }
}
