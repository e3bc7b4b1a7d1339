//! Pricing, promo codes, and the confirmation messages shown to the user.

/// The one promo code the store recognizes, for 100% off.
pub const FREE_PROMO_CODE: &str = "udidarmony";

/// Parse a catalog base price. Returns `None` for anything that is not a
/// finite number ("NaN" parses as a float but is rejected here).
pub fn parse_base_price(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Promo codes are compared trimmed and lowercased.
pub fn normalize_promo_code(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Total for one purchase. The promo code drops the price to exactly zero;
/// any other input leaves the base price untouched.
pub fn discounted_total(base_price: f64, promo_code: &str) -> f64 {
    if normalize_promo_code(promo_code) == FREE_PROMO_CODE {
        0.0
    } else {
        base_price
    }
}

/// Confirmation shown after a design is saved.
pub fn saved_message(product_name: &str, size: &str) -> String {
    format!("Your {product_name} design has been saved! Size: {size}.")
}

/// Confirmation shown after a purchase. A zero total only happens via the
/// promo code, so it gets the promo wording.
pub fn purchase_message(product_name: &str, total: f64) -> String {
    if total == 0.0 {
        format!("Promo code applied! Your {product_name} is free. Enjoy!")
    } else {
        format!("Your {product_name} total is ${total:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_price_parses_plain_decimals() {
        assert_eq!(parse_base_price("25.00"), Some(25.0));
        assert_eq!(parse_base_price(" 45.00 "), Some(45.0));
        assert_eq!(parse_base_price("0"), Some(0.0));
    }

    #[test]
    fn base_price_rejects_non_numbers() {
        assert_eq!(parse_base_price(""), None);
        assert_eq!(parse_base_price("free"), None);
        assert_eq!(parse_base_price("$25.00"), None);
        // parses as a float, but must not reach pricing
        assert_eq!(parse_base_price("NaN"), None);
    }

    #[test]
    fn promo_code_is_trimmed_and_case_insensitive() {
        assert_eq!(discounted_total(25.0, "udidarmony"), 0.0);
        assert_eq!(discounted_total(25.0, "  UdidArmony "), 0.0);
        assert_eq!(discounted_total(25.0, "UDIDARMONY"), 0.0);
    }

    #[test]
    fn unknown_promo_codes_leave_the_total_alone() {
        assert_eq!(discounted_total(25.0, ""), 25.0);
        assert_eq!(discounted_total(25.0, "letmein"), 25.0);
        assert_eq!(discounted_total(25.0, "udidarmony extra"), 25.0);
    }

    #[test]
    fn saved_message_matches_storefront_wording() {
        assert_eq!(
            saved_message("tshirt", "M"),
            "Your tshirt design has been saved! Size: M."
        );
    }

    #[test]
    fn purchase_message_formats_two_decimals() {
        assert_eq!(purchase_message("tshirt", 25.0), "Your tshirt total is $25.00");
        assert_eq!(purchase_message("hoodie", 45.5), "Your hoodie total is $45.50");
    }

    #[test]
    fn free_total_gets_the_promo_wording() {
        assert_eq!(
            purchase_message("tshirt", 0.0),
            "Promo code applied! Your tshirt is free. Enjoy!"
        );
    }
}
