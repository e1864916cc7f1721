use crate::SampleQuestion;

pub fn role() -> SampleQuestion {
    SampleQuestion::new(
        "role",
        "Who enters the spooky forest?",
        [
            ("Wizard", "wizard"),
            ("Ranger", "ranger"),
            ("Bard", "bard"),
            ("Lost accountant", "accountant"),
        ],
    )
}

pub fn companion() -> SampleQuestion {
    SampleQuestion::new(
        "companion",
        "Who comes along?",
        [("A black cat", "cat"), ("A talking owl", "owl"), ("Nobody", "none")],
    )
}

pub fn spooky_forest() -> Vec<SampleQuestion> {
    vec![role(), companion()]
}
