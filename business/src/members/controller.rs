//! Glue between the table, the loader and the view-state binding.
//!
//! Data flow: binding -> search term -> load -> `poll` -> table. The UI calls `poll`
//! once per frame and renders from `table()`.

use log::debug;

use super::loader::{LoadOutcome, MembersLoader};
use super::table::MembersTable;
use crate::binding::ViewStateBinding;
use crate::config::BusinessConfig;

#[derive(Debug)]
pub struct MembersController<B> {
    table: MembersTable,
    loader: MembersLoader,
    binding: B,
    mounted: bool,
}

impl<B: ViewStateBinding> MembersController<B> {
    pub fn new(config: &BusinessConfig, binding: B) -> Self {
        Self::with_table(config, binding, MembersTable::new())
    }

    pub fn with_table(config: &BusinessConfig, binding: B, table: MembersTable) -> Self {
        Self {
            table,
            loader: MembersLoader::new(config.members_url),
            binding,
            mounted: false,
        }
    }

    /// Seed the search term from the binding and issue the first load.
    /// Later calls do nothing.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let term = self.binding.read();
        self.table.set_search_term(&term);
        self.loader.load(&term);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Re-read the binding after an outside navigation. Loads again and returns true
    /// if the term moved.
    pub fn sync_from_binding(&mut self) -> bool {
        let term = self.binding.read();
        if !self.table.set_search_term(&term) {
            return false;
        }
        self.loader.load(&term);
        true
    }

    /// The operator typed in the search box.
    pub fn set_search(&mut self, term: &str) {
        if !self.table.set_search_term(term) {
            return;
        }
        self.binding.write(term);
        self.loader.load(term);
    }

    /// Apply finished loads. Returns true if the member list was replaced.
    pub fn poll(&mut self) -> bool {
        let mut replaced = false;
        for outcome in self.loader.poll() {
            match outcome {
                LoadOutcome::Loaded { members, .. } => {
                    self.table.replace_members(members);
                    replaced = true;
                }
                LoadOutcome::Failed { term, .. } => {
                    debug!("Keeping previous members after failed load for {term:?}");
                }
            }
        }
        replaced
    }

    /// Reload the current term without changing it.
    pub fn refresh(&mut self) {
        let term = self.table.search_term().to_string();
        self.loader.load(&term);
    }

    pub fn table(&self) -> &MembersTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut MembersTable {
        &mut self.table
    }

    pub fn loader(&self) -> &MembersLoader {
        &self.loader
    }

    pub fn binding(&self) -> &B {
        &self.binding
    }

    pub fn binding_mut(&mut self) -> &mut B {
        &mut self.binding
    }
}
