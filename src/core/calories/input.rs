//! Meal collection prompts

use super::Meal;
use crate::core::console::Console;
use crate::core::error::Result;

/// Parse a meal count: a whole number greater than zero
///
/// # Errors
/// Returns the message to show when the answer is rejected.
pub fn parse_meal_count(answer: &str) -> std::result::Result<usize, String> {
    match answer.trim().parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).map_err(|_| "Please enter a positive number.".to_string()),
        Ok(_) => Err("Please enter a positive number.".to_string()),
        Err(_) => Err("Invalid input. Please enter a number.".to_string()),
    }
}

/// Parse a calorie amount: any finite real number that is not negative
///
/// # Errors
/// Returns the message to show when the answer is rejected.
pub fn parse_calories(answer: &str) -> std::result::Result<f64, String> {
    match parse_finite(answer) {
        Some(c) if c >= 0.0 => Ok(c),
        Some(_) => Err("Calories must be a non-negative number.".to_string()),
        None => Err("Invalid input. Please enter a valid number for calories.".to_string()),
    }
}

/// Parse a daily limit: a finite real number greater than zero
///
/// # Errors
/// Returns the message to show when the answer is rejected.
pub fn parse_limit(answer: &str) -> std::result::Result<f64, String> {
    match parse_finite(answer) {
        Some(l) if l > 0.0 => Ok(l),
        Some(_) => Err("Please enter a positive number for your limit.".to_string()),
        None => Err("Invalid input. Please enter a valid number.".to_string()),
    }
}

fn parse_finite(answer: &str) -> Option<f64> {
    answer
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Ask how many meals to log, then a name and calorie amount for each
///
/// # Errors
/// Returns an error if the console fails or input ends early.
pub fn collect_meals(console: &mut Console<'_>) -> Result<Vec<Meal>> {
    let count = console.ask_until(
        "How many meals would you like to log today? ",
        parse_meal_count,
    )?;
    console.blank()?;

    let mut meals = Vec::new();
    for number in 1..=count {
        let name = console.ask(&format!("Enter name for meal #{number}: "))?;
        let calories = console.ask_until(&format!("Enter calories for {name}: "), parse_calories)?;
        crate::debug!("Meal #{number}: {name} = {calories}");
        meals.push(Meal::new(name, calories));
        console.blank()?;
    }

    Ok(meals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::TallyError;

    #[test]
    fn meal_count_must_be_positive_integer() {
        assert_eq!(parse_meal_count(" 3 "), Ok(3));
        assert_eq!(
            parse_meal_count("0"),
            Err("Please enter a positive number.".to_string())
        );
        assert_eq!(
            parse_meal_count("-2"),
            Err("Please enter a positive number.".to_string())
        );
        assert_eq!(
            parse_meal_count("2.5"),
            Err("Invalid input. Please enter a number.".to_string())
        );
        assert!(parse_meal_count("three").is_err());
    }

    #[test]
    fn calories_accept_zero_and_fractions() {
        assert_eq!(parse_calories("0"), Ok(0.0));
        assert_eq!(parse_calories("450.5"), Ok(450.5));
        assert_eq!(
            parse_calories("-1"),
            Err("Calories must be a non-negative number.".to_string())
        );
        assert!(parse_calories("lots").is_err());
        assert!(parse_calories("NaN").is_err());
        assert!(parse_calories("inf").is_err());
    }

    #[test]
    fn limit_must_be_strictly_positive() {
        assert_eq!(parse_limit("1800"), Ok(1800.0));
        assert_eq!(
            parse_limit("0"),
            Err("Please enter a positive number for your limit.".to_string())
        );
        assert_eq!(
            parse_limit("abc"),
            Err("Invalid input. Please enter a valid number.".to_string())
        );
    }

    #[test]
    fn huge_meal_count_waits_for_input() {
        let mut out = Vec::new();
        let mut console = Console::new("1000000000000000000\n".as_bytes(), &mut out);

        let result = collect_meals(&mut console);
        assert!(matches!(result, Err(TallyError::InputClosed)));
    }

    #[test]
    fn collects_meals_with_retries() {
        let input = "two\n0\n2\nOats\nlots\n-5\n350\nSalad\n420.5\n";
        let mut out = Vec::new();
        let mut console = Console::new(input.as_bytes(), &mut out);

        let meals = collect_meals(&mut console).expect("collect");
        drop(console);

        assert_eq!(
            meals,
            vec![Meal::new("Oats", 350.0), Meal::new("Salad", 420.5)]
        );
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("Invalid input. Please enter a number."));
        assert!(text.contains("Please enter a positive number."));
        assert!(text.contains("Enter calories for Oats: "));
        assert!(text.contains("Calories must be a non-negative number."));
    }
}
