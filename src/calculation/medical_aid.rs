//! Medical aid contribution estimate.
//!
//! Estimates the monthly medical aid amount from scheme membership and the
//! number of dependants. The preview shows this alongside the rate panel; the
//! deduction itself uses the amount resolved by the server.

use rust_decimal::Decimal;

/// Monthly amount for the main member.
pub const MEDICAL_AID_MAIN_MEMBER: Decimal = Decimal::from_parts(364, 0, 0, false, 0);

/// Monthly amount for the first dependant.
pub const MEDICAL_AID_FIRST_DEPENDANT: Decimal = Decimal::from_parts(364, 0, 0, false, 0);

/// Monthly amount for each additional dependant.
pub const MEDICAL_AID_ADDITIONAL_DEPENDANT: Decimal = Decimal::from_parts(246, 0, 0, false, 0);

/// Estimates the monthly medical aid amount.
///
/// Returns zero for non-members; otherwise 364 for the main member, 364 more
/// for the first dependant, and 246 for each further dependant.
///
/// # Examples
///
/// ```
/// use payroll_preview::calculation::estimate_medical_aid_contribution;
/// use rust_decimal::Decimal;
///
/// assert_eq!(estimate_medical_aid_contribution(true, 0), Decimal::new(364, 0));
/// assert_eq!(estimate_medical_aid_contribution(true, 3), Decimal::new(1220, 0));
/// assert_eq!(estimate_medical_aid_contribution(false, 3), Decimal::ZERO);
/// ```
pub fn estimate_medical_aid_contribution(member: bool, dependants: u32) -> Decimal {
    if !member {
        return Decimal::ZERO;
    }

    match dependants {
        0 => MEDICAL_AID_MAIN_MEMBER,
        n => {
            MEDICAL_AID_MAIN_MEMBER
                + MEDICAL_AID_FIRST_DEPENDANT
                + MEDICAL_AID_ADDITIONAL_DEPENDANT * Decimal::from(n - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_member_is_zero() {
        assert_eq!(estimate_medical_aid_contribution(false, 0), Decimal::ZERO);
    }

    #[test]
    fn test_main_member_only() {
        assert_eq!(MEDICAL_AID_MAIN_MEMBER, Decimal::new(364, 0));
        assert_eq!(MEDICAL_AID_FIRST_DEPENDANT, Decimal::new(364, 0));
        assert_eq!(MEDICAL_AID_ADDITIONAL_DEPENDANT, Decimal::new(246, 0));

        assert_eq!(estimate_medical_aid_contribution(true, 0), Decimal::new(364, 0));
    }

    #[test]
    fn test_one_dependant() {
        assert_eq!(estimate_medical_aid_contribution(true, 1), Decimal::new(728, 0));
    }

    #[test]
    fn test_additional_dependants() {
        assert_eq!(estimate_medical_aid_contribution(true, 2), Decimal::new(974, 0));
        assert_eq!(estimate_medical_aid_contribution(true, 5), Decimal::new(1712, 0));
    }
}
