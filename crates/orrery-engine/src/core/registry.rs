use crate::components::body::{Body, BodyKind};

/// Body storage using a flat Vec, keyed by string id.
/// Designed for small scenes (dozens of bodies, not millions); iteration
/// order is insertion order, which keeps frame-to-frame render order
/// stable.
pub struct Registry {
    bodies: Vec<Body>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(128),
        }
    }

    /// Insert a body, or replace the existing body with the same id.
    /// Replacement keeps the body's position in iteration order.
    pub fn upsert(&mut self, body: Body) {
        if let Some(slot) = self.bodies.iter_mut().find(|b| b.id == body.id) {
            *slot = body;
        } else {
            self.bodies.push(body);
        }
    }

    /// Get a reference to a body by id.
    pub fn get(&self, id: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Get a mutable reference to a body by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Iterate over all bodies in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Iterate over all bodies mutably, in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    /// Mutable slice access for systems that need index-based passes
    /// (the stepper resolves ring parents against the prefix).
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Count bodies of one kind.
    pub fn count_of(&self, kind: BodyKind) -> usize {
        self.bodies.iter().filter(|b| b.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Remove all bodies. Used before a full rebuild.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
