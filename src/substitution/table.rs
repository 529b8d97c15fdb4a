//! Compiled-in substitution data. Entries are listed in preference order.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubstitutionEntry {
    pub name: &'static str,
    pub ratio: &'static str,
    pub reason: &'static str,
    pub best_for: Option<&'static str>,
}

const fn entry(
    name: &'static str,
    ratio: &'static str,
    reason: &'static str,
    best_for: Option<&'static str>,
) -> SubstitutionEntry {
    SubstitutionEntry { name, ratio, reason, best_for }
}

/// Alternate spellings folded onto a canonical table key before lookup.
pub const INGREDIENT_ALIASES: &[(&str, &str)] = &[
    ("eggs", "egg"),
    ("large egg", "egg"),
    ("large eggs", "egg"),
    ("unsalted butter", "butter"),
    ("salted butter", "butter"),
    ("whole milk", "milk"),
    ("all purpose flour", "all-purpose flour"),
    ("plain flour", "all-purpose flour"),
    ("flour", "all-purpose flour"),
    ("heavy whipping cream", "heavy cream"),
    ("whipping cream", "heavy cream"),
    ("granulated sugar", "sugar"),
    ("white sugar", "sugar"),
    ("light brown sugar", "brown sugar"),
    ("dark brown sugar", "brown sugar"),
    ("parmigiano-reggiano", "parmesan cheese"),
    ("parmesan", "parmesan cheese"),
    ("bread crumbs", "breadcrumbs"),
    ("corn starch", "cornstarch"),
    ("plain yogurt", "yogurt"),
];

pub const SUBSTITUTION_TABLE: &[(&str, &[SubstitutionEntry])] = &[
    (
        "butter",
        &[
            entry("Coconut oil", "1:1", "Solid at room temperature like butter, dairy-free", Some("baking")),
            entry("Olive oil", "3:4", "Healthy fat with a savory profile", Some("sautéing")),
            entry("Unsweetened applesauce", "1:2", "Cuts fat while keeping baked goods moist", Some("baking")),
            entry("Greek yogurt", "1:2", "Adds moisture and tang with less fat", Some("baking")),
            entry("Ghee", "1:1", "Clarified butter with the milk solids removed", Some("cooking")),
        ],
    ),
    (
        "milk",
        &[
            entry("Oat milk", "1:1", "Creamy texture and neutral flavor", Some("baking")),
            entry("Soy milk", "1:1", "Similar protein content to dairy milk", Some("sauces")),
            entry("Almond milk", "1:1", "Light and slightly nutty", Some("smoothies")),
            entry("Coconut milk", "1:1", "Rich and creamy, adds subtle coconut flavor", Some("curries")),
            entry("Water and butter", "1 cup water + 1 tbsp butter", "Pantry fallback when no milk is on hand", None),
        ],
    ),
    (
        "egg",
        &[
            entry("Flax egg", "1 tbsp ground flaxseed + 3 tbsp water", "Binds like egg once gelled for 5 minutes", Some("baking")),
            entry("Chia egg", "1 tbsp chia seeds + 3 tbsp water", "Forms a gel that binds batters", Some("baking")),
            entry("Unsweetened applesauce", "1/4 cup per egg", "Adds moisture and binding", Some("cakes and muffins")),
            entry("Mashed banana", "1/4 cup per egg", "Binds and sweetens", Some("quick breads")),
            entry("Aquafaba", "3 tbsp per egg", "Chickpea liquid whips like egg whites", Some("meringues")),
        ],
    ),
    (
        "heavy cream",
        &[
            entry("Coconut cream", "1:1", "Whips and thickens like dairy cream", Some("desserts")),
            entry("Cashew cream", "1:1", "Blended soaked cashews, rich and neutral", Some("sauces")),
            entry("Milk and butter", "3/4 cup milk + 1/4 cup melted butter", "Recreates the fat content of cream", Some("cooking")),
        ],
    ),
    (
        "sour cream",
        &[
            entry("Greek yogurt", "1:1", "Same tang and thickness with more protein", None),
            entry("Cashew cream with lemon", "1:1", "Dairy-free with a similar tang", Some("dips")),
            entry("Coconut cream with lemon", "1:1", "Thick and tangy, dairy-free", Some("dolloping")),
        ],
    ),
    (
        "buttermilk",
        &[
            entry("Milk with lemon juice", "1 cup milk + 1 tbsp lemon juice", "Acid curdles milk to mimic buttermilk", Some("baking")),
            entry("Soy milk with vinegar", "1 cup soy milk + 1 tbsp vinegar", "Dairy-free and curdles well", Some("pancakes")),
            entry("Thinned yogurt", "3/4 cup yogurt + 1/4 cup water", "Similar tang and acidity", Some("marinades")),
        ],
    ),
    (
        "yogurt",
        &[
            entry("Coconut yogurt", "1:1", "Dairy-free with similar texture", None),
            entry("Sour cream", "1:1", "Similar tang, richer", Some("dips")),
            entry("Silken tofu blended with lemon", "1:1", "High protein, dairy-free", Some("smoothies")),
        ],
    ),
    (
        "cream cheese",
        &[
            entry("Cashew cream cheese", "1:1", "Dairy-free and spreadable", Some("spreads")),
            entry("Mascarpone", "1:1", "Richer and milder", Some("desserts")),
            entry("Ricotta cheese", "1:1", "Lighter, blend until smooth", Some("fillings")),
        ],
    ),
    (
        "parmesan cheese",
        &[
            entry("Nutritional yeast", "1:2", "Savory, cheesy flavor without dairy", Some("pasta")),
            entry("Pecorino Romano", "1:1", "Sharper, saltier hard cheese", None),
            entry("Toasted breadcrumbs", "1:1", "Adds crunch in place of a cheese crust", Some("toppings")),
        ],
    ),
    (
        "all-purpose flour",
        &[
            entry("Gluten-free flour blend", "1:1", "Cup-for-cup replacement without gluten", Some("baking")),
            entry("Whole wheat flour", "3:4", "More fiber and a nuttier flavor", Some("bread")),
            entry("Almond flour", "1:1", "Low-carb and gluten-free, denser crumb", Some("cookies")),
            entry("Oat flour", "4:3", "Mild flavor, gluten-free if certified", Some("pancakes")),
        ],
    ),
    (
        "sugar",
        &[
            entry("Honey", "3:4", "Natural sweetener; reduce other liquids slightly", Some("baking")),
            entry("Maple syrup", "3:4", "Adds caramel notes; reduce liquids", Some("baking")),
            entry("Coconut sugar", "1:1", "Lower glycemic index, similar texture", None),
        ],
    ),
    (
        "brown sugar",
        &[
            entry("White sugar with molasses", "1 cup sugar + 1 tbsp molasses", "Recreates brown sugar's moisture and depth", None),
            entry("Coconut sugar", "1:1", "Similar caramel flavor", None),
            entry("Maple syrup", "3:4", "Moist sweetness; reduce liquids", Some("sauces")),
        ],
    ),
    (
        "honey",
        &[
            entry("Maple syrup", "1:1", "Vegan liquid sweetener", None),
            entry("Agave nectar", "1:1", "Neutral flavor, sweeter than honey", Some("drinks")),
            entry("Brown rice syrup", "5:4", "Milder and less sweet", Some("granola")),
        ],
    ),
    (
        "soy sauce",
        &[
            entry("Tamari", "1:1", "Usually gluten-free, similar flavor", None),
            entry("Coconut aminos", "1:1", "Soy-free and less salty", None),
            entry("Worcestershire sauce", "1:2", "Umami depth, different character", Some("marinades")),
        ],
    ),
    (
        "breadcrumbs",
        &[
            entry("Crushed crackers", "1:1", "Similar crunch", Some("coating")),
            entry("Rolled oats", "1:1", "Binds meatballs and loaves", Some("binding")),
            entry("Almond flour", "1:1", "Gluten-free coating", Some("coating")),
        ],
    ),
    (
        "cornstarch",
        &[
            entry("Arrowroot powder", "1:1", "Clear gel, freezes well", Some("sauces")),
            entry("Potato starch", "1:1", "Strong thickener, gluten-free", Some("soups")),
            entry("All-purpose flour", "2:1", "Use twice as much, cooks opaque", Some("gravies")),
        ],
    ),
    (
        "baking powder",
        &[
            entry("Baking soda and cream of tartar", "1/4 tsp soda + 1/2 tsp cream of tartar per tsp", "Same leavening reaction", None),
            entry("Baking soda and buttermilk", "1/4 tsp soda + 1/2 cup buttermilk per tsp", "Acidic dairy activates soda", Some("quick breads")),
        ],
    ),
    (
        "white wine",
        &[
            entry("Chicken broth with lemon", "1:1", "Savory with a touch of acidity", Some("pan sauces")),
            entry("White grape juice", "1:1", "Fruity and slightly sweet", Some("desserts")),
            entry("White wine vinegar diluted", "1 tbsp vinegar + water to 1 cup", "Keeps the acidity", Some("deglazing")),
        ],
    ),
    (
        "lemon juice",
        &[
            entry("Lime juice", "1:1", "Same acidity, different citrus note", None),
            entry("White wine vinegar", "1:2", "Acidity without citrus flavor", Some("dressings")),
        ],
    ),
    (
        "mayonnaise",
        &[
            entry("Greek yogurt", "1:1", "Lighter and tangy", Some("dressings")),
            entry("Mashed avocado", "1:1", "Creamy and egg-free", Some("sandwiches")),
            entry("Vegan mayo", "1:1", "Egg-free emulsion", None),
        ],
    ),
    (
        "peanut butter",
        &[
            entry("Sunflower seed butter", "1:1", "Nut-free with a similar texture", None),
            entry("Almond butter", "1:1", "Similar richness, different nut", None),
            entry("Tahini", "1:1", "Nut-free sesame paste, less sweet", Some("sauces")),
        ],
    ),
];

/// Generic rules tried when no exact key matches. The first rule whose keyword is the
/// ingredient's head noun wins.
pub const GENERIC_RULES: &[(&[&str], &[SubstitutionEntry])] = &[
    (
        &["flour"],
        &[
            entry("Gluten-free flour blend", "1:1", "Cup-for-cup replacement without gluten", Some("baking")),
            entry("Almond flour", "1:1", "Gluten-free, adds richness", Some("cookies")),
            entry("Gluten-free oat flour", "4:3", "Mild flavor, gluten-free", Some("pancakes")),
        ],
    ),
    (
        &["milk", "cream"],
        &[
            entry("Oat milk", "1:1", "Creamy plant-based milk", None),
            entry("Soy milk", "1:1", "High-protein plant-based milk", None),
            entry("Coconut milk", "1:1", "Rich plant-based milk", Some("curries")),
        ],
    ),
    (
        &["cheese"],
        &[
            entry("Nutritional yeast", "1:2", "Cheesy flavor without dairy", None),
            entry("Cashew cheese", "1:1", "Creamy dairy-free cheese", Some("spreads")),
        ],
    ),
    (
        &["egg"],
        &[
            entry("Flax egg", "1 tbsp ground flaxseed + 3 tbsp water", "Plant-based binder", Some("baking")),
            entry("Aquafaba", "3 tbsp per egg", "Chickpea liquid, whips like whites", None),
        ],
    ),
    (
        &["sugar", "syrup"],
        &[
            entry("Maple syrup", "3:4", "Natural liquid sweetener", None),
            entry("Coconut sugar", "1:1", "Less refined sweetener", None),
        ],
    ),
    (
        &["broth", "stock"],
        &[
            entry("Water with bouillon", "1 cup water + 1 bouillon cube", "Concentrated stock flavor", None),
            entry("Vegetable broth", "1:1", "Plant-based savory base", None),
        ],
    ),
    (
        &["oil"],
        &[
            entry("Unsweetened applesauce", "1:1", "Reduces fat in baking", Some("baking")),
            entry("Melted butter", "1:1", "Richer flavor", Some("baking")),
        ],
    ),
];
