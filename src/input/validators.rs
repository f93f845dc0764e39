use regex::Regex;

pub type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send>;

pub fn required(message: impl Into<String>) -> Validator {
    let msg = message.into();
    Box::new(move |value: &str| {
        if value.trim().is_empty() {
            Err(msg.clone())
        } else {
            Ok(())
        }
    })
}

pub fn min_length(min: usize) -> Validator {
    Box::new(move |value: &str| {
        if value.chars().count() < min {
            Err(format!("حداقل {} حرف وارد کنید", min))
        } else {
            Ok(())
        }
    })
}

pub fn max_length(max: usize) -> Validator {
    Box::new(move |value: &str| {
        if value.chars().count() > max {
            Err(format!("حداکثر {} حرف مجاز است", max))
        } else {
            Ok(())
        }
    })
}

pub fn regex(pattern: &str, message: impl Into<String>) -> Validator {
    let re = Regex::new(pattern).expect("invalid validator pattern");
    let msg = message.into();
    Box::new(move |value: &str| {
        if value.is_empty() || re.is_match(value) {
            Ok(())
        } else {
            Err(msg.clone())
        }
    })
}

/// Iranian mobile numbers: 09 followed by nine digits.
pub fn phone() -> Validator {
    regex(r"^09\d{9}$", "شماره موبایل معتبر نیست (مثال: 09151234567)")
}

pub fn custom<F>(f: F, message: impl Into<String>) -> Validator
where
    F: Fn(&str) -> bool + Send + 'static,
{
    let msg = message.into();
    Box::new(
        move |value: &str| {
            if f(value) { Ok(()) } else { Err(msg.clone()) }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        let v = required("لازم است");
        assert_eq!(v("  "), Err("لازم است".to_string()));
        assert_eq!(v("علی"), Ok(()));
    }

    #[test]
    fn phone_matches_iranian_mobiles() {
        let v = phone();
        assert_eq!(v("09151234567"), Ok(()));
        assert!(v("0915123456").is_err());
        assert!(v("+989151234567").is_err());
        assert!(v("02112345678").is_err());
        // Emptiness is the `required` validator's concern.
        assert_eq!(v(""), Ok(()));
    }

    #[test]
    fn length_bounds() {
        assert!(min_length(3)("ab").is_err());
        assert_eq!(min_length(3)("abc"), Ok(()));
        assert!(max_length(2)("abc").is_err());
    }
}
