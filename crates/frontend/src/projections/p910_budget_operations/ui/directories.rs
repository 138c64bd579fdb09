//! Справочники страницы в контексте приложения

use super::super::api::{fetch_directory, DirectoryKind};
use crate::shared::directory::Directory;
use leptos::logging::error;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct Directories {
    pub cost_centers: RwSignal<Directory>,
    pub stores: RwSignal<Directory>,
    pub campaigns: RwSignal<Directory>,
    pub activities: RwSignal<Directory>,
    pub marketing: RwSignal<Directory>,
}

impl Directories {
    pub fn new() -> Self {
        Self {
            cost_centers: RwSignal::new(Directory::new()),
            stores: RwSignal::new(Directory::new()),
            campaigns: RwSignal::new(Directory::new()),
            activities: RwSignal::new(Directory::new()),
            marketing: RwSignal::new(Directory::new()),
        }
    }

    pub fn get(&self, kind: DirectoryKind) -> RwSignal<Directory> {
        match kind {
            DirectoryKind::CostCenters => self.cost_centers,
            DirectoryKind::Stores => self.stores,
            DirectoryKind::Campaigns => self.campaigns,
            DirectoryKind::Activities => self.activities,
            DirectoryKind::Marketing => self.marketing,
        }
    }

    /// Загрузка справочника; `ids` нужны кампаниям и активностям,
    /// чтобы выбранные в фильтре значения были подписаны
    pub fn load(&self, kind: DirectoryKind, ids: Option<Vec<String>>) {
        let dir = self.get(kind);
        dir.update(|d| d.begin_fetch());

        spawn_local(async move {
            let result = fetch_directory(kind, ids).await;
            if let Err(e) = &result {
                error!("Failed to load directory {:?}: {}", kind, e);
            }
            dir.try_update(|d| d.complete(result));
        });
    }
}

impl Default for Directories {
    fn default() -> Self {
        Self::new()
    }
}

/// Справочники из контекста; если их никто не предоставил, создаются локально
pub fn use_directories() -> Directories {
    use_context::<Directories>().unwrap_or_else(|| {
        let dirs = Directories::new();
        provide_context(dirs);
        dirs
    })
}
