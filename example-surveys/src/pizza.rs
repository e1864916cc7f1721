use crate::SampleQuestion;

pub fn size() -> SampleQuestion {
    SampleQuestion::new(
        "size",
        "What size pizza?",
        [("Small (10\")", "small"), ("Medium (12\")", "medium"), ("Large (14\")", "large")],
    )
}

pub fn crust() -> SampleQuestion {
    SampleQuestion::new(
        "crust",
        "Which crust?",
        [("Thin & crispy", "thin"), ("Classic", "classic"), ("Stuffed", "stuffed")],
    )
}

/// A short order form: size, then crust.
pub fn pizza_order() -> Vec<SampleQuestion> {
    vec![size(), crust()]
}
