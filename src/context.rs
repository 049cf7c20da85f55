//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use taskboard_core::{AppConfig, AuthGateway, Labels, SupabaseBackend};

pub type Gateway = AuthGateway<SupabaseBackend>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Local storage: the HTTP client lives on the browser thread
    gateway: StoredValue<Rc<Gateway>, LocalStorage>,
    /// Trigger to reload tasks/users from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks/users from backend - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(config: AppConfig, reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        let backend = SupabaseBackend::new(config.backend.clone());
        let gateway = AuthGateway::new(backend, config.labels.clone());
        Self {
            config: StoredValue::new(config),
            gateway: StoredValue::new_local(Rc::new(gateway)),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    pub fn labels(&self) -> Labels {
        self.config.with_value(|c| c.labels.clone())
    }

    pub fn gateway(&self) -> Rc<Gateway> {
        self.gateway.get_value()
    }

    /// Trigger a reload of tasks and users
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
