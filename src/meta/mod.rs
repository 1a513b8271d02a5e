use crate::math::{vector::Vector, FloatNum};

pub type Mass = FloatNum;

pub type Speed = Vector;

/// How a body's mass is resolved, decided once at construction.
///
/// `Automatic` derives mass from the current surface size of the
/// body; the mode never changes afterwards.
#[derive(Clone, Copy, Debug)]
pub enum MassPolicy {
    Fixed(Mass),
    Automatic,
}

impl From<Mass> for MassPolicy {
    // zero is the sentinel selecting automatic mode
    fn from(mass: Mass) -> Self {
        if mass == 0. {
            MassPolicy::Automatic
        } else {
            MassPolicy::Fixed(mass)
        }
    }
}

#[derive(Clone)]
pub struct Meta {
    velocity: Speed,
    mass: MassPolicy,
    is_static: bool,
}

impl Meta {
    pub fn velocity(&self) -> Speed {
        self.velocity
    }

    pub fn set_velocity(&mut self, mut reducer: impl FnMut(Speed) -> Speed) -> &mut Self {
        self.velocity = reducer(self.velocity);
        self
    }

    pub fn speed(&self) -> FloatNum {
        self.velocity.abs()
    }

    pub fn mass_policy(&self) -> MassPolicy {
        self.mass
    }

    /// Silent no-op in automatic mode.
    pub fn set_mass(&mut self, mut reducer: impl FnMut(Mass) -> Mass) -> &mut Self {
        if let MassPolicy::Fixed(mass) = self.mass {
            self.mass = MassPolicy::Fixed(reducer(mass));
        }
        self
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }
}

#[derive(Clone)]
pub struct MetaBuilder {
    meta: Meta,
}

impl From<MetaBuilder> for Meta {
    fn from(builder: MetaBuilder) -> Self {
        builder.meta
    }
}

impl MetaBuilder {
    pub fn new(mass: Mass) -> Self {
        Self {
            meta: Meta {
                velocity: (0., 0.).into(),
                mass: mass.into(),
                is_static: false,
            },
        }
    }

    pub fn velocity(mut self, velocity: impl Into<Speed>) -> Self {
        self.meta.velocity = velocity.into();
        self
    }

    pub fn is_static(mut self, is_static: bool) -> Self {
        self.meta.is_static = is_static;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_mass_selects_automatic_mode() {
        assert!(matches!(MassPolicy::from(0.), MassPolicy::Automatic));
        assert!(matches!(MassPolicy::from(5.), MassPolicy::Fixed(_)));
    }

    #[test]
    fn test_set_mass_is_ignored_in_automatic_mode() {
        let mut meta: Meta = MetaBuilder::new(0.).into();
        meta.set_mass(|_| 99.);
        assert!(matches!(meta.mass_policy(), MassPolicy::Automatic));
    }

    #[test]
    fn test_set_mass_updates_fixed_mode() {
        let mut meta: Meta = MetaBuilder::new(5.).into();
        meta.set_mass(|_| 10.);
        assert!(matches!(meta.mass_policy(), MassPolicy::Fixed(mass) if mass == 10.));
    }

    #[test]
    fn test_speed_follows_velocity() {
        let mut meta: Meta = MetaBuilder::new(1.).velocity((3., 4.)).into();
        assert_eq!(meta.speed(), 5.);
        meta.set_velocity(|pre| pre * 2.);
        assert_eq!(meta.speed(), 10.);
    }
}
