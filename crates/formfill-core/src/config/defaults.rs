//! Compiled default rules.
//!
//! The built-in rule list covers the common identity vocabulary of
//! English-language forms; profile and user rules are scanned before it.

use crate::rules::{EmailSettings, FieldKind, FieldRule, HostnameStrategy, UsernameStrategy};

/// Template used for telephone fields with no matching rule.
pub const DEFAULT_TELEPHONE_TEMPLATE: &str = "+1 (XxX) XxX-XxxX";

fn rule(name: &str, patterns: &[&str], kind: FieldKind) -> FieldRule {
    FieldRule {
        name: name.to_string(),
        match_patterns: patterns.iter().map(|p| p.to_string()).collect(),
        kind,
    }
}

/// The email rule used when an email control matches nothing else.
pub fn default_email_rule() -> FieldRule {
    rule(
        "Email Address",
        &["email"],
        FieldKind::Email(EmailSettings {
            prefix: None,
            suffix: None,
            username: UsernameStrategy::Random,
            username_list: Some(vec!["jack".to_string(), "jill".to_string()]),
            username_regex: None,
            hostname: HostnameStrategy::List,
            hostname_list: Some(vec!["example.com".to_string()]),
        }),
    )
}

/// The compiled default rule list, scanned after profile rules.
pub fn built_in_rules() -> Vec<FieldRule> {
    vec![
        rule(
            "Postcode",
            &["postcode", "postalcode"],
            FieldKind::Regex { template: "[34][1-8]{3}".to_string() },
        ),
        rule(
            "Date of Birth",
            &["birthdate", "dateofbirth"],
            FieldKind::Date {
                template: Some("DD-MM-YYYY".to_string()),
                min: None,
                max: None,
                min_date: Some("1970-01-01".to_string()),
                max_date: Some("2000-01-01".to_string()),
            },
        ),
        rule(
            "Expiry Date",
            &["expiry"],
            FieldKind::Date {
                template: Some("DD-MM-YYYY".to_string()),
                min: Some(30),
                max: Some(3000),
                min_date: None,
                max_date: None,
            },
        ),
        rule(
            "Date",
            &["date\\s+"],
            FieldKind::Date {
                template: Some("DD-MMM-YYYY".to_string()),
                min: None,
                max: Some(0),
                min_date: Some("1970-01-01".to_string()),
                max_date: None,
            },
        ),
        rule(
            "Passport #",
            &["passportnumber"],
            FieldKind::Regex { template: "P\\d{7}".to_string() },
        ),
        rule("Username", &["userid", "username"], FieldKind::Username),
        rule(
            "First Name",
            &["firstname", "givenname", "middlename"],
            FieldKind::FirstName,
        ),
        rule(
            "Last Name",
            &["lastname", "surname", "secondname", "familyname"],
            FieldKind::LastName,
        ),
        default_email_rule(),
        rule(
            "Organization or Company Name",
            &["organization", "organisation", "company"],
            FieldKind::Organization,
        ),
        rule("Full Name", &["fullname", "name"], FieldKind::FullName),
        rule(
            "Credit Card",
            &["creditcard"],
            FieldKind::Regex {
                template: "((42){7}0|4000056655665550|5{12}4440|2223003122003220|520082{5}10|(510){5}0|378282246310005|371449635398431|6011(11|98)1{9}0|6011000990139420|3056930009020000|36227206271667|6555900000604100|3566002020360500|620{12}(4|0)0|620550{14}|(40{5}|5{6})2500001001|4000050360000001|5555050360000080)".to_string(),
            },
        ),
        rule(
            "Phone Number",
            &["phone", "fax", "mobile", "cell"],
            FieldKind::Telephone { template: Some("+61 400 XXX XXX".to_string()) },
        ),
        rule(
            "A Random Number between 1 and 1000",
            &[
                "integer", "number", "numeric", "income", "price", "qty", "quantity",
                "amount", "numof", "noof",
            ],
            FieldKind::Number { min: Some(1.0), max: Some(1000.0), decimal_places: Some(0) },
        ),
        rule(
            "Day",
            &["day"],
            FieldKind::Number { min: Some(1.0), max: Some(28.0), decimal_places: Some(0) },
        ),
        rule(
            "Month",
            &["month"],
            FieldKind::Number { min: Some(1.0), max: Some(12.0), decimal_places: Some(0) },
        ),
        rule(
            "Year",
            &["year"],
            FieldKind::Number { min: Some(1970.0), max: Some(2022.0), decimal_places: Some(0) },
        ),
        rule("Website Address", &["website"], FieldKind::Url),
        rule(
            "Address Line 2",
            &["address2", "addressline2", "street2"],
            FieldKind::Regex {
                template: "(Suite|Apartment|Apt.?|#|Number|No|) [1-9][0-9]{0,2}[A-G]?".to_string(),
            },
        ),
        rule("Address Line 1", &["address", "street"], FieldKind::StreetAddress),
        rule("Country", &["country"], FieldKind::Country),
        rule(
            "City",
            &["city", "location", "suburb"],
            FieldKind::RandomizedList {
                list: [
                    "Melbourne", "Sydney", "Brisbane", "Perth", "Adelaide",
                    "Northern Territory", "Tasmania", "Canberra",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::KindTag;

    #[test]
    fn test_built_in_rules_order_puts_specific_before_generic() {
        let rules = built_in_rules();
        let first_name = rules.iter().position(|r| r.name == "First Name").unwrap();
        let full_name = rules.iter().position(|r| r.name == "Full Name").unwrap();
        // "firstname" must win over the generic "name" pattern.
        assert!(first_name < full_name);
    }

    #[test]
    fn test_default_email_rule_shape() {
        let rule = default_email_rule();
        assert_eq!(rule.tag(), KindTag::Email);
        assert_eq!(rule.match_patterns, vec!["email"]);
    }
}
