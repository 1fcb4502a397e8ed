use crate::units::UnitClass;
use serde::{Deserialize, Serialize};

/// The two independent per-player currencies.
///
/// The structure currency regenerates slowly and pays for stationary units
/// (and their upgrades); the mobile currency regenerates quickly and pays
/// for mobile spawns.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourcePool {
    pub structure: f32,
    pub mobile: f32,
}

impl ResourcePool {
    pub fn new(structure: f32, mobile: f32) -> Self {
        ResourcePool { structure, mobile }
    }

    pub fn available(&self, class: UnitClass) -> f32 {
        match class {
            UnitClass::Stationary => self.structure,
            UnitClass::Mobile => self.mobile,
        }
    }

    pub fn can_afford(&self, class: UnitClass, cost: f32) -> bool {
        self.available(class) >= cost
    }

    /// Atomic spend: either the full cost is deducted and `true` returned,
    /// or the pool is untouched. Pools never go negative.
    pub fn spend(&mut self, class: UnitClass, cost: f32) -> bool {
        if !self.can_afford(class, cost) {
            return false;
        }
        match class {
            UnitClass::Stationary => self.structure -= cost,
            UnitClass::Mobile => self.mobile -= cost,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spend_is_atomic() {
        let mut pool = ResourcePool::new(5.0, 2.0);
        assert!(pool.spend(UnitClass::Stationary, 3.0));
        assert_eq!(pool.structure, 2.0);
        assert!(!pool.spend(UnitClass::Stationary, 3.0));
        assert_eq!(pool.structure, 2.0, "failed spend must not deduct");
        assert!(pool.spend(UnitClass::Mobile, 2.0));
        assert_eq!(pool.mobile, 0.0);
    }
}
