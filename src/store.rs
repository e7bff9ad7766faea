//! In-memory event store.
//!
//! Events and their category input records live behind one `RwLock`.
//! Reads share the lock; each write takes it exclusively. Category
//! records are first-write-wins: a second submission for the same
//! category is rejected so that stored inputs stay immutable.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::calc::Category;
use crate::event::{
    AccommodationInput, AmenitiesInput, CateringInput, CategoryInputs, CommunicationInput,
    EnergyInput, EventProfile, FreightInput, PurchasesInput, TransportInput, WasteInput,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("event \"{0}\" not found")]
    EventNotFound(String),
    #[error("no {category} record for event \"{event_id}\"")]
    RecordNotFound { event_id: String, category: Category },
    #[error("{category} record already submitted for event \"{event_id}\"")]
    AlreadySubmitted { event_id: String, category: Category },
    #[error("store lock poisoned")]
    Poisoned,
}

/// One stored category record with its concrete input payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "category", content = "input")]
pub enum CategoryRecord {
    Energy(EnergyInput),
    Transport(TransportInput),
    Catering(CateringInput),
    Accommodation(AccommodationInput),
    Waste(WasteInput),
    Communication(CommunicationInput),
    Freight(FreightInput),
    Amenities(AmenitiesInput),
    Purchases(PurchasesInput),
}

impl CategoryRecord {
    /// Explodes an input set into individual records, present
    /// categories only.
    pub fn from_inputs(inputs: CategoryInputs) -> Vec<CategoryRecord> {
        let mut records = Vec::new();
        if let Some(i) = inputs.energy {
            records.push(CategoryRecord::Energy(i));
        }
        if let Some(i) = inputs.transport {
            records.push(CategoryRecord::Transport(i));
        }
        if let Some(i) = inputs.catering {
            records.push(CategoryRecord::Catering(i));
        }
        if let Some(i) = inputs.accommodation {
            records.push(CategoryRecord::Accommodation(i));
        }
        if let Some(i) = inputs.waste {
            records.push(CategoryRecord::Waste(i));
        }
        if let Some(i) = inputs.communication {
            records.push(CategoryRecord::Communication(i));
        }
        if let Some(i) = inputs.freight {
            records.push(CategoryRecord::Freight(i));
        }
        if let Some(i) = inputs.amenities {
            records.push(CategoryRecord::Amenities(i));
        }
        if let Some(i) = inputs.purchases {
            records.push(CategoryRecord::Purchases(i));
        }
        records
    }

    pub fn category(&self) -> Category {
        match self {
            CategoryRecord::Energy(_) => Category::Energy,
            CategoryRecord::Transport(_) => Category::Transport,
            CategoryRecord::Catering(_) => Category::Catering,
            CategoryRecord::Accommodation(_) => Category::Accommodation,
            CategoryRecord::Waste(_) => Category::Waste,
            CategoryRecord::Communication(_) => Category::Communication,
            CategoryRecord::Freight(_) => Category::Freight,
            CategoryRecord::Amenities(_) => Category::Amenities,
            CategoryRecord::Purchases(_) => Category::Purchases,
        }
    }
}

/// A stored event: its profile plus whatever category records have
/// arrived so far.
#[derive(Debug, Clone, Serialize)]
pub struct StoredEvent {
    pub event_id: String,
    pub created_at: DateTime<Utc>,
    pub profile: EventProfile,
    #[serde(skip)]
    records: HashMap<&'static str, CategoryRecord>,
}

impl StoredEvent {
    /// Categories that have a record, in submission-independent order.
    pub fn submitted_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.records.contains_key(c.label()))
            .collect()
    }

    /// Collects the stored records into the engine's input set.
    pub fn inputs(&self) -> CategoryInputs {
        let mut inputs = CategoryInputs::default();
        for record in self.records.values() {
            match record.clone() {
                CategoryRecord::Energy(i) => inputs.energy = Some(i),
                CategoryRecord::Transport(i) => inputs.transport = Some(i),
                CategoryRecord::Catering(i) => inputs.catering = Some(i),
                CategoryRecord::Accommodation(i) => inputs.accommodation = Some(i),
                CategoryRecord::Waste(i) => inputs.waste = Some(i),
                CategoryRecord::Communication(i) => inputs.communication = Some(i),
                CategoryRecord::Freight(i) => inputs.freight = Some(i),
                CategoryRecord::Amenities(i) => inputs.amenities = Some(i),
                CategoryRecord::Purchases(i) => inputs.purchases = Some(i),
            }
        }
        inputs
    }
}

/// Thread-safe in-memory store keyed by event id.
#[derive(Debug, Default)]
pub struct EventStore {
    events: RwLock<HashMap<String, StoredEvent>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new event and returns its generated id.
    pub fn create_event(&self, profile: EventProfile) -> Result<String, StoreError> {
        let event_id = Uuid::new_v4().to_string();
        let stored = StoredEvent {
            event_id: event_id.clone(),
            created_at: Utc::now(),
            profile,
            records: HashMap::new(),
        };
        let mut events = self.events.write().map_err(|_| StoreError::Poisoned)?;
        info!(event_id = %event_id, name = %stored.profile.event_name, "event created");
        events.insert(event_id.clone(), stored);
        Ok(event_id)
    }

    /// Fetches a snapshot of one event.
    pub fn get_event(&self, event_id: &str) -> Result<StoredEvent, StoreError> {
        let events = self.events.read().map_err(|_| StoreError::Poisoned)?;
        events
            .get(event_id)
            .cloned()
            .ok_or_else(|| StoreError::EventNotFound(event_id.to_string()))
    }

    /// Lists all stored events, newest first.
    pub fn list_events(&self) -> Result<Vec<StoredEvent>, StoreError> {
        let events = self.events.read().map_err(|_| StoreError::Poisoned)?;
        let mut all: Vec<StoredEvent> = events.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    /// Submits one category record. Fails if the event does not exist
    /// or the category already has a record.
    pub fn put_record(&self, event_id: &str, record: CategoryRecord) -> Result<(), StoreError> {
        let category = record.category();
        let mut events = self.events.write().map_err(|_| StoreError::Poisoned)?;
        let stored = events
            .get_mut(event_id)
            .ok_or_else(|| StoreError::EventNotFound(event_id.to_string()))?;
        if stored.records.contains_key(category.label()) {
            return Err(StoreError::AlreadySubmitted {
                event_id: event_id.to_string(),
                category,
            });
        }
        info!(event_id = %event_id, %category, "category record submitted");
        stored.records.insert(category.label(), record);
        Ok(())
    }

    /// Fetches one category record.
    pub fn get_record(
        &self,
        event_id: &str,
        category: Category,
    ) -> Result<CategoryRecord, StoreError> {
        let events = self.events.read().map_err(|_| StoreError::Poisoned)?;
        let stored = events
            .get(event_id)
            .ok_or_else(|| StoreError::EventNotFound(event_id.to_string()))?;
        stored
            .records
            .get(category.label())
            .cloned()
            .ok_or(StoreError::RecordNotFound {
                event_id: event_id.to_string(),
                category,
            })
    }

    /// Profile and collected inputs for one event, ready for assessment.
    pub fn inputs_for(&self, event_id: &str) -> Result<(EventProfile, CategoryInputs), StoreError> {
        let stored = self.get_event(event_id)?;
        let inputs = stored.inputs();
        Ok((stored.profile, inputs))
    }
}
