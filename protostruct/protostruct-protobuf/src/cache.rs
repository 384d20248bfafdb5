//! Compute-once cache of struct inspectors.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use prost_reflect::MessageDescriptor;
use protostruct_core::InspectorError;
use tracing::trace;

use crate::{inspector::ProtobufStructInspector, signature::TypeSignature};

/// Thread-safe cache holding one inspector per structurally distinct message
/// type.
///
/// Construction is pure, so a racing build simply loses to whichever entry
/// was inserted first.
#[derive(Debug, Default)]
pub struct InspectorCache {
    entries: RwLock<HashMap<TypeSignature, Arc<ProtobufStructInspector>>>,
}

impl InspectorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached inspector for `descriptor`, building it on first use.
    pub fn get_or_build(
        &self,
        descriptor: &MessageDescriptor,
    ) -> Result<Arc<ProtobufStructInspector>, InspectorError> {
        let key = TypeSignature::of(descriptor);
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(inspector) = entries.get(&key) {
                trace!(type_name = key.full_name(), "inspector cache hit");
                return Ok(Arc::clone(inspector));
            }
        }

        let built = Arc::new(ProtobufStructInspector::new(descriptor.clone())?);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        trace!(type_name = key.full_name(), "inspector cache miss");
        Ok(Arc::clone(entries.entry(key).or_insert(built)))
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
