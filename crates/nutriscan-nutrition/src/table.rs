//! Per-100g macro-nutrient data for the Food-101 categories.

use nutriscan_core::NutritionRecord;

const fn rec(calories: f64, protein: f64, carbs: f64, fat: f64) -> NutritionRecord {
    NutritionRecord { calories, protein, carbs, fat }
}

/// Nutrition data keyed by normalized category name. Compiled in; never
/// mutated.
pub static FOOD_CATEGORIES: &[(&str, NutritionRecord)] = &[
    ("apple_pie", rec(237.0, 2.4, 34.0, 11.0)),
    ("baby_back_ribs", rec(360.0, 27.0, 0.0, 28.0)),
    ("baklava", rec(330.0, 5.0, 40.0, 18.0)),
    ("beef_carpaccio", rec(120.0, 20.0, 1.0, 4.0)),
    ("beef_tartare", rec(220.0, 17.0, 2.0, 16.0)),
    ("beet_salad", rec(89.0, 2.5, 12.0, 4.0)),
    ("beignets", rec(280.0, 5.0, 35.0, 14.0)),
    ("bibimbap", rec(490.0, 22.0, 68.0, 14.0)),
    ("bread_pudding", rec(310.0, 8.0, 48.0, 10.0)),
    ("breakfast_burrito", rec(380.0, 18.0, 38.0, 17.0)),
    ("bruschetta", rec(160.0, 5.0, 22.0, 6.0)),
    ("caesar_salad", rec(470.0, 25.0, 15.0, 35.0)),
    ("cannoli", rec(290.0, 7.0, 30.0, 16.0)),
    ("caprese_salad", rec(240.0, 12.0, 8.0, 18.0)),
    ("carrot_cake", rec(415.0, 5.0, 52.0, 22.0)),
    ("ceviche", rec(145.0, 18.0, 8.0, 4.0)),
    ("cheesecake", rec(320.0, 6.0, 26.0, 22.0)),
    ("cheese_plate", rec(350.0, 22.0, 3.0, 28.0)),
    ("chicken_curry", rec(350.0, 25.0, 20.0, 18.0)),
    ("chicken_quesadilla", rec(540.0, 28.0, 42.0, 28.0)),
    ("chicken_wings", rec(430.0, 25.0, 12.0, 31.0)),
    ("chocolate_cake", rec(352.0, 5.0, 50.0, 16.0)),
    ("chocolate_mousse", rec(310.0, 4.0, 28.0, 21.0)),
    ("churros", rec(315.0, 5.0, 42.0, 15.0)),
    ("clam_chowder", rec(230.0, 12.0, 18.0, 12.0)),
    ("club_sandwich", rec(590.0, 32.0, 45.0, 32.0)),
    ("crab_cakes", rec(340.0, 18.0, 20.0, 20.0)),
    ("creme_brulee", rec(290.0, 4.0, 28.0, 18.0)),
    ("croque_madame", rec(510.0, 28.0, 32.0, 30.0)),
    ("cup_cakes", rec(305.0, 3.0, 45.0, 13.0)),
    ("deviled_eggs", rec(145.0, 10.0, 2.0, 11.0)),
    ("donuts", rec(290.0, 4.0, 35.0, 15.0)),
    ("dumplings", rec(280.0, 12.0, 35.0, 10.0)),
    ("edamame", rec(120.0, 11.0, 10.0, 5.0)),
    ("eggs_benedict", rec(460.0, 20.0, 25.0, 32.0)),
    ("escargots", rec(180.0, 15.0, 2.0, 12.0)),
    ("falafel", rec(333.0, 13.0, 32.0, 18.0)),
    ("filet_mignon", rec(277.0, 26.0, 0.0, 19.0)),
    ("fish_and_chips", rec(585.0, 32.0, 45.0, 30.0)),
    ("foie_gras", rec(462.0, 11.0, 4.0, 44.0)),
    ("french_fries", rec(312.0, 3.4, 41.0, 15.0)),
    ("french_onion_soup", rec(190.0, 8.0, 18.0, 9.0)),
    ("french_toast", rec(360.0, 12.0, 48.0, 14.0)),
    ("fried_calamari", rec(330.0, 15.0, 28.0, 17.0)),
    ("fried_rice", rec(333.0, 8.0, 54.0, 9.0)),
    ("frozen_yogurt", rec(127.0, 4.0, 24.0, 2.0)),
    ("garlic_bread", rec(350.0, 9.0, 43.0, 16.0)),
    ("gnocchi", rec(250.0, 6.0, 48.0, 3.0)),
    ("greek_salad", rec(210.0, 7.0, 12.0, 15.0)),
    ("grilled_cheese_sandwich", rec(440.0, 18.0, 38.0, 24.0)),
    ("grilled_salmon", rec(367.0, 40.0, 0.0, 22.0)),
    ("guacamole", rec(160.0, 2.0, 9.0, 15.0)),
    ("gyoza", rec(280.0, 12.0, 32.0, 11.0)),
    ("hamburger", rec(540.0, 28.0, 42.0, 28.0)),
    ("hot_and_sour_soup", rec(90.0, 5.0, 10.0, 3.0)),
    ("hot_dog", rec(290.0, 11.0, 24.0, 17.0)),
    ("huevos_rancheros", rec(410.0, 18.0, 36.0, 22.0)),
    ("hummus", rec(166.0, 8.0, 14.0, 10.0)),
    ("ice_cream", rec(207.0, 3.5, 24.0, 11.0)),
    ("lasagna", rec(360.0, 18.0, 30.0, 18.0)),
    ("lobster_bisque", rec(280.0, 14.0, 12.0, 19.0)),
    ("lobster_roll_sandwich", rec(436.0, 24.0, 36.0, 20.0)),
    ("macaroni_and_cheese", rec(370.0, 15.0, 40.0, 16.0)),
    ("macarons", rec(140.0, 2.0, 20.0, 6.0)),
    ("miso_soup", rec(40.0, 3.0, 5.0, 1.0)),
    ("mussels", rec(172.0, 24.0, 7.0, 4.5)),
    ("nachos", rec(560.0, 16.0, 56.0, 30.0)),
    ("omelette", rec(154.0, 11.0, 1.2, 12.0)),
    ("onion_rings", rec(411.0, 5.0, 38.0, 27.0)),
    ("oysters", rec(68.0, 7.0, 4.0, 2.5)),
    ("pad_thai", rec(690.0, 28.0, 82.0, 26.0)),
    ("paella", rec(360.0, 22.0, 42.0, 11.0)),
    ("pancakes", rec(227.0, 6.0, 28.0, 10.0)),
    ("panna_cotta", rec(290.0, 5.0, 26.0, 19.0)),
    ("peking_duck", rec(336.0, 19.0, 0.0, 28.0)),
    ("pho", rec(350.0, 22.0, 45.0, 8.0)),
    ("pizza", rec(266.0, 11.0, 33.0, 10.0)),
    ("pork_chop", rec(231.0, 26.0, 0.0, 14.0)),
    ("poutine", rec(740.0, 28.0, 82.0, 34.0)),
    ("prime_rib", rec(320.0, 25.0, 0.0, 24.0)),
    ("pulled_pork_sandwich", rec(520.0, 30.0, 46.0, 22.0)),
    ("ramen", rec(436.0, 18.0, 54.0, 16.0)),
    ("ravioli", rec(350.0, 14.0, 42.0, 14.0)),
    ("red_velvet_cake", rec(478.0, 5.0, 68.0, 22.0)),
    ("risotto", rec(360.0, 8.0, 52.0, 12.0)),
    ("samosa", rec(262.0, 5.0, 32.0, 13.0)),
    ("sashimi", rec(127.0, 23.0, 0.0, 3.5)),
    ("scallops", rec(137.0, 24.0, 6.0, 1.4)),
    ("seaweed_salad", rec(45.0, 2.0, 8.0, 1.0)),
    ("shrimp_and_grits", rec(420.0, 24.0, 38.0, 18.0)),
    ("spaghetti_bolognese", rec(370.0, 18.0, 48.0, 11.0)),
    ("spaghetti_carbonara", rec(540.0, 22.0, 52.0, 26.0)),
    ("spring_rolls", rec(140.0, 5.0, 18.0, 5.0)),
    ("steak", rec(271.0, 26.0, 0.0, 18.0)),
    ("strawberry_shortcake", rec(340.0, 5.0, 48.0, 15.0)),
    ("sushi", rec(145.0, 6.0, 21.0, 4.0)),
    ("tacos", rec(226.0, 10.0, 20.0, 12.0)),
    ("takoyaki", rec(240.0, 10.0, 28.0, 9.0)),
    ("tiramisu", rec(240.0, 5.0, 28.0, 12.0)),
    ("tuna_tartare", rec(120.0, 23.0, 2.0, 2.0)),
    ("waffles", rec(291.0, 7.0, 37.0, 13.0)),
];
