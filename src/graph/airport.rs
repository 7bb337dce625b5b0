//! Flight network: airports connected by outbound flights

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::error::{GraphError, GraphResult};

/// Unique identifier for an airport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AirportId(Uuid);

impl AirportId {
    /// Create a new random AirportId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an AirportId from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for AirportId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AirportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An airport and the airports it has direct flights to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// Identity of the airport
    pub id: AirportId,
    /// Display code such as "SEA"; not required to be unique
    pub code: String,
    /// Destinations of outbound flights
    #[serde(default)]
    pub outbound: Vec<AirportId>,
}

impl Airport {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            id: AirportId::new(),
            code: code.into(),
            outbound: Vec::new(),
        }
    }

    /// Destinations reachable with a single flight
    pub fn outbound_flights(&self) -> &[AirportId] {
        &self.outbound
    }
}

/// A set of airports keyed by identity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirportNetwork {
    airports: HashMap<AirportId, Airport>,
    /// Insertion order, used for code lookups
    order: Vec<AirportId>,
}

impl AirportNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from airport codes and `(from, to)` code pairs
    ///
    /// Every distinct code becomes exactly one airport. Codes that only
    /// appear in flights are created on first use.
    pub fn from_routes<A, F, S>(airports: A, flights: F) -> Self
    where
        A: IntoIterator<Item = S>,
        F: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut network = Self::new();
        let mut by_code: HashMap<String, AirportId> = HashMap::new();

        for code in airports {
            network.intern(&mut by_code, code.as_ref());
        }
        for (from, to) in flights {
            let from = network.intern(&mut by_code, from.as_ref());
            let to = network.intern(&mut by_code, to.as_ref());
            if let Some(airport) = network.airports.get_mut(&from) {
                airport.outbound.push(to);
            }
        }

        network
    }

    fn intern(&mut self, by_code: &mut HashMap<String, AirportId>, code: &str) -> AirportId {
        if let Some(id) = by_code.get(code) {
            return *id;
        }
        let id = self.add_airport(code);
        by_code.insert(code.to_string(), id);
        id
    }

    /// Add an airport and return its identity
    pub fn add_airport(&mut self, code: impl Into<String>) -> AirportId {
        let airport = Airport::new(code);
        let id = airport.id;
        self.airports.insert(id, airport);
        self.order.push(id);
        id
    }

    /// Add a direct flight from one known airport to another
    pub fn add_flight(&mut self, from: AirportId, to: AirportId) -> GraphResult<()> {
        if !self.airports.contains_key(&to) {
            return Err(GraphError::UnknownAirport(to));
        }
        let airport = self
            .airports
            .get_mut(&from)
            .ok_or(GraphError::UnknownAirport(from))?;
        airport.outbound.push(to);
        Ok(())
    }

    pub fn get(&self, id: &AirportId) -> Option<&Airport> {
        self.airports.get(id)
    }

    /// Outbound flights of an airport, empty when the airport is unknown
    pub fn outbound_flights(&self, id: &AirportId) -> &[AirportId] {
        self.get(id).map(Airport::outbound_flights).unwrap_or(&[])
    }

    /// First airport (in insertion order) carrying the given code
    pub fn find_by_code(&self, code: &str) -> Option<AirportId> {
        self.order
            .iter()
            .find(|id| self.airports.get(*id).is_some_and(|a| a.code == code))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}
