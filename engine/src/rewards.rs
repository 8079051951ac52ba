//! VIP reward math.
//!
//! Pure functions shared by every payout path: the per-level coin bonus and
//! the experience/level-up schedule. Experience is never bonus-adjusted; only
//! coin amounts are.

use spinhall_types::session::{VipStatus, VIP_BONUS_PERCENT_PER_LEVEL, VIP_EXP_PER_LEVEL};

/// Coin-reward bonus percent for a VIP level (level 3 = +30%).
pub fn vip_bonus_percent(level: u32) -> u64 {
    u64::from(level) * VIP_BONUS_PERCENT_PER_LEVEL
}

/// Apply the VIP bonus to a base coin amount, rounding down.
///
/// Widens to u128 for the intermediate product so the multiplication cannot
/// overflow; the result saturates at `u64::MAX`.
pub fn apply_vip_bonus(base: u64, level: u32) -> u64 {
    let percent = vip_bonus_percent(level) as u128;
    let scaled = (base as u128) * (100 + percent) / 100;
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

/// Add experience to a VIP status, clearing as many level thresholds as the
/// total covers. Returns the number of levels gained.
///
/// Thresholds grow linearly, so the crossing count is found by bisecting the
/// series sum rather than stepping one level at a time; even a `u64::MAX`
/// grant resolves in a few dozen steps. Leftover experience carries into the
/// new level, so the rest invariant `experience < required_exp()` holds on
/// return.
pub fn grant_experience(vip: &mut VipStatus, gained: u64) -> u32 {
    let total = u128::from(vip.experience) + u128::from(gained);
    let first = u128::from(vip.required_exp());
    let step = u128::from(VIP_EXP_PER_LEVEL);
    // Combined cost of the next `count` thresholds, an arithmetic series
    // starting at the current level's requirement.
    let cost = |count: u128| count * first + step * (count * count.saturating_sub(1) / 2);

    // Largest count with cost(count) <= total. The cost is quadratic in
    // count, so any u64-ranged total is cleared well before count reaches
    // u32 territory and the doubling stays far inside u128.
    let mut lo = 0u128;
    let mut hi = 1u128;
    while cost(hi) <= total {
        lo = hi;
        hi *= 2;
    }
    while lo + 1 < hi {
        let mid = lo + (hi - lo) / 2;
        if cost(mid) <= total {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    let levels = lo as u32;
    vip.level += levels;
    vip.experience = (total - cost(lo)) as u64;
    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vip(level: u32, experience: u64) -> VipStatus {
        VipStatus { level, experience }
    }

    #[test]
    fn test_bonus_percent_schedule() {
        assert_eq!(vip_bonus_percent(0), 0);
        assert_eq!(vip_bonus_percent(1), 10);
        assert_eq!(vip_bonus_percent(3), 30);
        assert_eq!(vip_bonus_percent(10), 100);
    }

    #[test]
    fn test_apply_bonus_floors() {
        // Level 3 grants +30%.
        assert_eq!(apply_vip_bonus(100, 3), 130);
        // 105 * 1.1 = 115.5, floors to 115.
        assert_eq!(apply_vip_bonus(105, 1), 115);
        // Level 0 is the identity.
        assert_eq!(apply_vip_bonus(999, 0), 999);
        assert_eq!(apply_vip_bonus(0, 7), 0);
    }

    #[test]
    fn test_apply_bonus_saturates_instead_of_overflowing() {
        assert_eq!(apply_vip_bonus(u64::MAX, 0), u64::MAX);
        assert_eq!(apply_vip_bonus(u64::MAX, 5), u64::MAX);
    }

    #[test]
    fn test_grant_experience_no_level_up() {
        let mut status = vip(0, 0);
        let gained = grant_experience(&mut status, 99);
        assert_eq!(gained, 0);
        assert_eq!(status, vip(0, 99));
    }

    #[test]
    fn test_grant_experience_carries_remainder() {
        // Level 0 requires 100; 90 + 20 crosses with 10 left over.
        let mut status = vip(0, 90);
        let gained = grant_experience(&mut status, 20);
        assert_eq!(gained, 1);
        assert_eq!(status, vip(1, 10));
    }

    #[test]
    fn test_grant_experience_crosses_multiple_levels() {
        // Thresholds: 100 (level 0), 150 (level 1), 200 (level 2).
        let mut status = vip(0, 0);
        let gained = grant_experience(&mut status, 100 + 150 + 200 + 5);
        assert_eq!(gained, 3);
        assert_eq!(status, vip(3, 5));
    }

    #[test]
    fn test_grant_experience_exact_threshold_lands_at_zero() {
        let mut status = vip(1, 0);
        let gained = grant_experience(&mut status, 150);
        assert_eq!(gained, 1);
        assert_eq!(status, vip(2, 0));
    }

    #[test]
    fn test_grant_experience_rest_invariant_holds() {
        let mut status = vip(0, 0);
        for gain in [1u64, 49, 99, 100, 151, 500, 10_000] {
            grant_experience(&mut status, gain);
            assert!(
                status.experience < status.required_exp(),
                "experience {} must stay below threshold {}",
                status.experience,
                status.required_exp()
            );
        }
    }

    #[test]
    fn test_grant_experience_matches_single_step_reference() {
        // One-threshold-at-a-time reference over the same schedule.
        fn stepped(vip: &mut VipStatus, gained: u64) -> u32 {
            let before = vip.level;
            vip.experience += gained;
            while vip.experience >= vip.required_exp() {
                vip.experience -= vip.required_exp();
                vip.level += 1;
            }
            vip.level - before
        }

        for level in [0u32, 1, 2, 7, 19] {
            for experience in [0u64, 1, 49, 99] {
                for gained in [0u64, 1, 99, 100, 101, 250, 5_000, 1_000_000] {
                    let mut fast = vip(level, experience);
                    let mut slow = vip(level, experience);
                    let fast_levels = grant_experience(&mut fast, gained);
                    let slow_levels = stepped(&mut slow, gained);
                    assert_eq!(
                        fast_levels, slow_levels,
                        "level {level} exp {experience} gain {gained}"
                    );
                    assert_eq!(fast, slow, "level {level} exp {experience} gain {gained}");
                }
            }
        }
    }

    #[test]
    fn test_grant_experience_huge_gain_stays_cheap() {
        let mut status = vip(0, 0);
        let gained = grant_experience(&mut status, u64::MAX);
        // Clearing the whole u64 range crosses the better part of a billion
        // thresholds.
        assert!(gained > 800_000_000);
        assert_eq!(status.level, gained);
        assert!(status.experience < status.required_exp());
    }
}
