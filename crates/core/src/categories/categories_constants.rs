/// Expense categories seeded for a fresh store
pub const DEFAULT_EXPENSE_CATEGORIES: [&str; 11] = [
    "Food & Dining",
    "Transportation",
    "Housing",
    "Utilities",
    "Healthcare",
    "Shopping",
    "Entertainment",
    "Education",
    "Insurance",
    "Savings",
    "Miscellaneous",
];

/// Income categories seeded for a fresh store
pub const DEFAULT_INCOME_CATEGORIES: [&str; 6] = [
    "Salary",
    "Freelance",
    "Investments",
    "Rental Income",
    "Business",
    "Other Income",
];
