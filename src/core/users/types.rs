//! Core user entity types
//!
//! Users are a closed tagged union over capability: customers and vendors
//! request access by supplying a location pin, agents hold non-expiring
//! sessions. Reconstruction from a stored type tag dispatches to the
//! matching variant rather than open-ended subtyping.

use crate::core::silo::SiloManager;
use crate::utils::error::{GateError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Default session expiry for non-actor users: 48 hours in seconds
pub const DEFAULT_SESSION_EXPIRY_SECS: u64 = 48 * 3600;

/// User role, determining the default session-expiry policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserType {
    /// Platform customer
    Customer,
    /// Platform vendor
    Vendor,
    /// Delivery rider agent
    Rider,
    /// Field marker agent
    Marker,
    /// Physical-task rabbit agent
    RabbitPhysical,
    /// Online-task rabbit agent
    RabbitOnline,
}

impl UserType {
    /// All known user types
    pub const ALL: [UserType; 6] = [
        UserType::Customer,
        UserType::Vendor,
        UserType::Rider,
        UserType::Marker,
        UserType::RabbitPhysical,
        UserType::RabbitOnline,
    ];

    /// Wire tag for this type, as stored in user records and index keys
    pub fn as_tag(&self) -> &'static str {
        match self {
            UserType::Customer => "Customer",
            UserType::Vendor => "Vendor",
            UserType::Rider => "Rider",
            UserType::Marker => "Marker",
            UserType::RabbitPhysical => "Rabbit_Physical",
            UserType::RabbitOnline => "Rabbit_Online",
        }
    }

    /// Resolve a wire tag back to its type
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "Customer" => Ok(UserType::Customer),
            "Vendor" => Ok(UserType::Vendor),
            "Rider" => Ok(UserType::Rider),
            "Marker" => Ok(UserType::Marker),
            "Rabbit_Physical" => Ok(UserType::RabbitPhysical),
            "Rabbit_Online" => Ok(UserType::RabbitOnline),
            other => Err(GateError::InvalidUserType(other.to_string())),
        }
    }

    /// Whether this type belongs to the agent class (actor identities)
    pub fn is_agent_class(&self) -> bool {
        !matches!(self, UserType::Customer | UserType::Vendor)
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new point from degrees
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Wire representation of a user, as JSON-encoded into the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique user identifier
    pub user_id: String,
    /// User type wire tag
    pub user_type: String,
    /// Whether this is an actor identity
    pub actor: bool,
    /// Session TTL in seconds; absent for actors
    pub session_expiry: Option<u64>,
    /// Last accepted location pin, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_pin: Option<GeoPoint>,
}

/// A customer identity with a location-gated access request
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// Unique user identifier
    pub user_id: String,
    /// User type (normally [`UserType::Customer`])
    pub user_type: UserType,
    /// Whether this is an actor identity
    pub actor: bool,
    /// Session TTL in seconds; `None` for actors
    pub session_expiry: Option<u64>,
    /// Last accepted location pin; set only by a successful proximity check
    pub location_pin: Option<GeoPoint>,
}

impl Customer {
    /// Create a non-actor customer with the default session expiry
    pub fn new(user_id: impl Into<String>) -> Self {
        Self::with_actor(user_id, false)
    }

    /// Create a customer, choosing the actor flag explicitly
    pub fn with_actor(user_id: impl Into<String>, actor: bool) -> Self {
        Self {
            user_id: user_id.into(),
            user_type: UserType::Customer,
            actor,
            session_expiry: default_expiry(actor),
            location_pin: None,
        }
    }

    /// Request platform access for a location pin.
    ///
    /// Records the pin and returns true when a silo is nearby; otherwise
    /// returns false without mutating state.
    pub fn request_session(&mut self, silos: &SiloManager, location_pin: GeoPoint) -> bool {
        if silos.is_nearby_silo(location_pin) {
            self.location_pin = Some(location_pin);
            info!(user_id = %self.user_id, pin = %location_pin, "customer granted platform access");
            true
        } else {
            debug!(user_id = %self.user_id, pin = %location_pin, "no nearby silo, access denied");
            false
        }
    }
}

/// A vendor identity with a location-gated presence declaration
#[derive(Debug, Clone, PartialEq)]
pub struct Vendor {
    /// Unique user identifier
    pub user_id: String,
    /// User type (normally [`UserType::Vendor`])
    pub user_type: UserType,
    /// Whether this is an actor identity
    pub actor: bool,
    /// Session TTL in seconds; `None` for actors
    pub session_expiry: Option<u64>,
    /// Last accepted location pin; set only by a successful proximity check
    pub location_pin: Option<GeoPoint>,
}

impl Vendor {
    /// Create a non-actor vendor with the default session expiry
    pub fn new(user_id: impl Into<String>) -> Self {
        Self::with_actor(user_id, false)
    }

    /// Create a vendor, choosing the actor flag explicitly
    pub fn with_actor(user_id: impl Into<String>, actor: bool) -> Self {
        Self {
            user_id: user_id.into(),
            user_type: UserType::Vendor,
            actor,
            session_expiry: default_expiry(actor),
            location_pin: None,
        }
    }

    /// Declare the vendor's location. Same contract as
    /// [`Customer::request_session`].
    pub fn enter_location(&mut self, silos: &SiloManager, location_pin: GeoPoint) -> bool {
        if silos.is_nearby_silo(location_pin) {
            self.location_pin = Some(location_pin);
            info!(user_id = %self.user_id, pin = %location_pin, "vendor entered location");
            true
        } else {
            debug!(user_id = %self.user_id, pin = %location_pin, "no nearby silo, access denied");
            false
        }
    }
}

/// An agent-class identity whose session never expires by TTL
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    /// Unique user identifier
    pub user_id: String,
    /// Agent-class user type (Rider, Marker, Rabbit_*)
    pub user_type: UserType,
    /// Always true for agents
    pub actor: bool,
    /// Always `None` for agents
    pub session_expiry: Option<u64>,
}

impl Agent {
    /// Create an actor agent of the given agent-class type
    pub fn new(user_id: impl Into<String>, user_type: UserType) -> Self {
        Self {
            user_id: user_id.into(),
            user_type,
            actor: true,
            session_expiry: None,
        }
    }
}

/// A platform user: the closed set of identity variants
#[derive(Debug, Clone, PartialEq)]
pub enum User {
    /// Customer variant
    Customer(Customer),
    /// Vendor variant
    Vendor(Vendor),
    /// Agent variant
    Agent(Agent),
}

impl User {
    /// Unique user identifier
    pub fn user_id(&self) -> &str {
        match self {
            User::Customer(c) => &c.user_id,
            User::Vendor(v) => &v.user_id,
            User::Agent(a) => &a.user_id,
        }
    }

    /// User type
    pub fn user_type(&self) -> UserType {
        match self {
            User::Customer(c) => c.user_type,
            User::Vendor(v) => v.user_type,
            User::Agent(a) => a.user_type,
        }
    }

    /// Whether this is an actor identity (session never expires by TTL)
    pub fn is_actor(&self) -> bool {
        match self {
            User::Customer(c) => c.actor,
            User::Vendor(v) => v.actor,
            User::Agent(a) => a.actor,
        }
    }

    /// Session TTL in seconds; `None` for actors
    pub fn session_expiry(&self) -> Option<u64> {
        match self {
            User::Customer(c) => c.session_expiry,
            User::Vendor(v) => v.session_expiry,
            User::Agent(a) => a.session_expiry,
        }
    }

    /// Last accepted location pin; always `None` for agents
    pub fn location_pin(&self) -> Option<GeoPoint> {
        match self {
            User::Customer(c) => c.location_pin,
            User::Vendor(v) => v.location_pin,
            User::Agent(_) => None,
        }
    }

    /// Convert to the wire record
    pub fn to_record(&self) -> UserRecord {
        UserRecord {
            user_id: self.user_id().to_string(),
            user_type: self.user_type().as_tag().to_string(),
            actor: self.is_actor(),
            session_expiry: self.session_expiry(),
            location_pin: self.location_pin(),
        }
    }

    /// Reconstruct the concrete variant from a wire record.
    ///
    /// Dispatches on the stored type tag: `Customer` and `Vendor` map to
    /// their variants, every agent-class tag maps to [`Agent`]. An unknown
    /// tag fails with [`GateError::InvalidUserType`].
    pub fn from_record(record: UserRecord) -> Result<Self> {
        let user_type = UserType::from_tag(&record.user_type)?;
        let user = match user_type {
            UserType::Customer => User::Customer(Customer {
                user_id: record.user_id,
                user_type,
                actor: record.actor,
                session_expiry: record.session_expiry,
                location_pin: record.location_pin,
            }),
            UserType::Vendor => User::Vendor(Vendor {
                user_id: record.user_id,
                user_type,
                actor: record.actor,
                session_expiry: record.session_expiry,
                location_pin: record.location_pin,
            }),
            _ => User::Agent(Agent {
                user_id: record.user_id,
                user_type,
                actor: record.actor,
                session_expiry: record.session_expiry,
            }),
        };
        Ok(user)
    }
}

impl From<Customer> for User {
    fn from(customer: Customer) -> Self {
        User::Customer(customer)
    }
}

impl From<Vendor> for User {
    fn from(vendor: Vendor) -> Self {
        User::Vendor(vendor)
    }
}

impl From<Agent> for User {
    fn from(agent: Agent) -> Self {
        User::Agent(agent)
    }
}

impl Serialize for User {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_record().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for User {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let record = UserRecord::deserialize(deserializer)?;
        User::from_record(record).map_err(serde::de::Error::custom)
    }
}

fn default_expiry(actor: bool) -> Option<u64> {
    if actor {
        None
    } else {
        Some(DEFAULT_SESSION_EXPIRY_SECS)
    }
}
