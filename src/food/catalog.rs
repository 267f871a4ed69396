//! The preset synergy catalog.
//!
//! The catalog is fixed at build time and loaded once; nothing mutates it at
//! runtime. Ranks are display hints and may repeat.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evidence {
    Clinical,
    Emerging,
    Anecdotal,
    Culinary,
    Traditional,
    Sports,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImpactDomain {
    Cognitive,
    Physical,
    Metabolic,
    Immune,
}

/// Kinetic synergies improve absorption, Dynamic ones amplify the effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SynergyType {
    Kinetic,
    Dynamic,
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for ImpactDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for SynergyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl SynergyType {
    /// Plain-language label shown next to the type.
    pub fn label(&self) -> &'static str {
        match self {
            SynergyType::Kinetic => "ABSORPTION",
            SynergyType::Dynamic => "EFFECT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SynergyKind {
    Duo,
    Trio,
}

impl SynergyKind {
    pub fn for_count(ingredients: usize) -> Self {
        if ingredients > 2 {
            SynergyKind::Trio
        } else {
            SynergyKind::Duo
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynergyRecord {
    pub rank: u32,
    pub ingredients: Vec<String>,
    pub name: String,
    pub magnitude: u8,
    pub amplification: String,
    pub evidence: Evidence,
    pub domain: ImpactDomain,
    #[serde(rename = "type")]
    pub synergy_type: SynergyType,
    pub description: String,
    pub tags: Vec<String>,
}

impl SynergyRecord {
    pub fn kind(&self) -> SynergyKind {
        SynergyKind::for_count(self.ingredients.len())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A goal chip: the tag it filters on and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalChip {
    pub id: &'static str,
    pub label: &'static str,
}

pub const GOAL_CHIPS: &[GoalChip] = &[
    GoalChip { id: "All", label: "VIEW ALL" },
    GoalChip { id: "Memory", label: "MEMORY" },
    GoalChip { id: "Energy", label: "ENERGY" },
    GoalChip { id: "Focus", label: "FOCUS" },
    GoalChip { id: "Sleep", label: "SLEEP" },
    GoalChip { id: "Immune", label: "IMMUNITY" },
    GoalChip { id: "Heart", label: "HEART" },
    GoalChip { id: "Gut", label: "DIGESTION" },
    GoalChip { id: "Muscle", label: "MUSCLE" },
    GoalChip { id: "Skin", label: "SKIN" },
];

pub const SAMPLE_FOODS: &[&str] = &[
    "Spinach", "Lemon", "Turmeric", "Black Pepper", "Green Tea", "Vitamin C",
    "Iron", "Calcium", "Yogurt", "Berries", "Oats", "Milk", "Coffee", "Red Meat",
    "L-Theanine", "Vitamin D3", "Vitamin K2", "Zinc", "Quercetin", "Creatine",
    "Ashwagandha", "Lion's Mane", "Magnesium", "Glycine", "Fish Oil", "Dark Chocolate",
];

pub const SUGGESTED_BASES: &[&str] = &[
    "Turmeric", "Spinach", "Green Tea", "Tomato", "Kale", "Salmon", "Oats", "Mushrooms",
];

pub const SUGGESTED_ACTIVATORS: &[&str] = &[
    "Black Pepper", "Lemon Juice", "Olive Oil", "Avocado", "Yogurt", "Vitamin C", "Mustard Seed",
];

#[allow(clippy::too_many_arguments)]
fn record(
    rank: u32,
    ingredients: &[&str],
    name: &str,
    magnitude: u8,
    amplification: &str,
    evidence: Evidence,
    domain: ImpactDomain,
    synergy_type: SynergyType,
    description: &str,
    tags: &[&str],
) -> SynergyRecord {
    SynergyRecord {
        rank,
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        name: name.to_string(),
        magnitude,
        amplification: amplification.to_string(),
        evidence,
        domain,
        synergy_type,
        description: description.to_string(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
    }
}

lazy_static! {
    static ref CATALOG: Vec<SynergyRecord> = vec![
        record(
            1,
            &["Turmeric", "Black Pepper", "Olive Oil"],
            "The Golden Trio",
            99,
            "Maximum",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Kinetic,
            "Pepper blocks liver breakdown, Fat solubilizes curcumin. The absolute maximum absorption possible for Turmeric.",
            &["Repair", "Joints", "Immune"],
        ),
        record(
            2,
            &["Vitamin D3", "Vitamin K2", "Avocado"],
            "Bone Density Trio",
            98,
            "Critical",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Dynamic,
            "D3 absorbs calcium, K2 directs it to bones, Fat ensures both vitamins are actually absorbed.",
            &["Bone", "Heart", "Safety"],
        ),
        record(
            3,
            &["Spinach", "Lemon", "Steak"],
            "Iron Max Stack",
            97,
            "6x",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Kinetic,
            "Heme iron (meat) + Vitamin C (lemon) creates the \"Meat Factor\" to supercharge plant iron absorption.",
            &["Energy", "Blood", "Iron"],
        ),
        record(
            4,
            &["Oats", "Walnuts", "Blueberries"],
            "Neuro Breakfast",
            96,
            "Synergistic",
            Evidence::Clinical,
            ImpactDomain::Cognitive,
            SynergyType::Dynamic,
            "Beta-glucan fiber + Omega-3s + Anthocyanins. The ultimate brain-fueling morning meal.",
            &["Brain", "Focus", "Breakfast"],
        ),
        record(
            5,
            &["Runny Egg Yolk", "Turmeric", "Black Pepper"],
            "Liquid Gold Egg",
            95,
            "High",
            Evidence::Culinary,
            ImpactDomain::Physical,
            SynergyType::Kinetic,
            "The perfect fat emulsion in liquid yolk maximizes turmeric absorption while pepper boosts bioavailability.",
            &["Breakfast", "Anti-Inflammatory", "Protein"],
        ),
        record(
            6,
            &["Caffeine", "L-Theanine"],
            "The Focus Stack",
            95,
            "4x",
            Evidence::Clinical,
            ImpactDomain::Cognitive,
            SynergyType::Dynamic,
            "The best combo for focus. Theanine calms the jittery feeling of coffee for clean energy.",
            &["Focus", "Energy", "Clarity"],
        ),
        record(
            7,
            &["Lion's Mane", "Niacin (B3)"],
            "Brain Repair",
            94,
            "High",
            Evidence::Emerging,
            ImpactDomain::Cognitive,
            SynergyType::Kinetic,
            "Niacin helps the mushroom's brain-repairing compounds reach your neurons.",
            &["Memory", "Repair", "Brain"],
        ),
        record(
            8,
            &["Magnesium", "Glycine"],
            "Deep Sleep",
            92,
            "Synergistic",
            Evidence::Clinical,
            ImpactDomain::Cognitive,
            SynergyType::Dynamic,
            "Relaxes both body and mind for high-quality, restorative sleep.",
            &["Sleep", "Calm", "Recovery"],
        ),
        record(
            9,
            &["Green Tea", "Lemon"],
            "Antioxidant Saver",
            91,
            "5x",
            Evidence::Clinical,
            ImpactDomain::Metabolic,
            SynergyType::Kinetic,
            "Citrus stabilizes the antioxidants in green tea so they survive digestion.",
            &["Health", "Metabolism", "Energy"],
        ),
        record(
            10,
            &["Tomato", "Olive Oil"],
            "Heart Protector",
            89,
            "4x",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Kinetic,
            "Fat makes Lycopene (in tomatoes) absorbable. Great for heart and skin.",
            &["Heart", "Skin", "Health"],
        ),
        record(
            11,
            &["Yogurt", "Banana"],
            "Gut Health Duo",
            87,
            "Synergistic",
            Evidence::Clinical,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Probiotics (yogurt) need Prebiotics (fiber in banana) to survive and thrive.",
            &["Gut", "Digestion", "Immune"],
        ),
        record(
            12,
            &["Rice", "Beans", "Salsa"],
            "Complete Fuel",
            86,
            "Additive",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Dynamic,
            "Complete protein plus Vitamin C from salsa to absorb iron from the beans.",
            &["Muscle", "Vegan", "Energy"],
        ),
        record(
            13,
            &["Creatine", "Carbs"],
            "Muscle Fuel",
            84,
            "High",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Kinetic,
            "Insulin from carbs helps push creatine into muscle cells faster.",
            &["Muscle", "Workout", "Strength"],
        ),
        record(
            14,
            &["Watermelon", "Lime"],
            "Blood Flow",
            82,
            "2x",
            Evidence::Emerging,
            ImpactDomain::Physical,
            SynergyType::Kinetic,
            "Citrulline in watermelon boosts nitric oxide; Vitamin C protects it.",
            &["Energy", "Pump", "Circulation"],
        ),
        record(
            15,
            &["Beetroot", "Spinach"],
            "Nitrate Surge",
            83,
            "Additive",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Dynamic,
            "Double source of nitrates for massive endurance and blood pressure benefits.",
            &["Endurance", "Heart", "Energy"],
        ),
        record(
            16,
            &["Garlic", "Honey", "Ginger"],
            "Immune Bomb",
            88,
            "Synergistic",
            Evidence::Traditional,
            ImpactDomain::Immune,
            SynergyType::Dynamic,
            "Triple threat against viruses and bacteria. Potent natural antibiotic.",
            &["Immune", "Sick", "Cold"],
        ),
        record(
            17,
            &["Zinc", "Quercetin"],
            "Virus Blocker",
            85,
            "High",
            Evidence::Emerging,
            ImpactDomain::Immune,
            SynergyType::Kinetic,
            "Quercetin opens cell doors so Zinc can enter and fight viruses.",
            &["Immune", "Defense"],
        ),
        record(
            18,
            &["Oatmeal", "Berries"],
            "Heart Breakfast",
            79,
            "Additive",
            Evidence::Clinical,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Fiber lowers cholesterol while antioxidants protect blood vessels.",
            &["Heart", "Breakfast", "Health"],
        ),
        record(
            19,
            &["Broccoli", "Mustard Seeds"],
            "Detox Activator",
            86,
            "4x",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Kinetic,
            "Mustard seeds replace enzymes lost in cooked broccoli to restore detox benefits.",
            &["Detox", "Liver", "Health"],
        ),
        record(
            20,
            &["Apple", "Dark Chocolate"],
            "Blood Clot Preventer",
            78,
            "Synergistic",
            Evidence::Emerging,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Quercetin and Catechins work together to improve circulation.",
            &["Heart", "Blood", "Snack"],
        ),
        record(
            21,
            &["Salmon", "Asparagus", "Lemon"],
            "Cell Energy Trio",
            85,
            "High",
            Evidence::Clinical,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "B12, Folate and Vitamin C work together for methylation.",
            &["Energy", "Detox"],
        ),
        record(
            22,
            &["Kale", "Avocado"],
            "Green Absorption",
            76,
            "3x",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Kinetic,
            "Fat makes Vitamin K in Kale absorbable.",
            &["Bone", "Health"],
        ),
        record(
            23,
            &["Eggs", "Salad"],
            "Veggie Booster",
            75,
            "4x",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Kinetic,
            "Egg yolk fat boosts antioxidant absorption from veggies by 400%.",
            &["Health", "Salad"],
        ),
        record(
            24,
            &["Pineapple", "Protein"],
            "Digestive Aid",
            74,
            "High",
            Evidence::Clinical,
            ImpactDomain::Metabolic,
            SynergyType::Kinetic,
            "Bromelain in pineapple helps break down meat proteins.",
            &["Digestion", "Gut"],
        ),
        record(
            25,
            &["Papaya", "Seeds"],
            "Gut Cleanse",
            73,
            "Synergistic",
            Evidence::Anecdotal,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Seeds have antiparasitic properties enhanced by papaya enzymes.",
            &["Gut", "Detox"],
        ),
        record(
            26,
            &["Ginger", "Lemon"],
            "Nausea Relief",
            72,
            "Additive",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Dynamic,
            "Classic combo for settling stomachs and boosting immunity.",
            &["Sick", "Stomach"],
        ),
        record(
            27,
            &["Coffee", "Cocoa"],
            "Mocha Focus",
            79,
            "Synergistic",
            Evidence::Clinical,
            ImpactDomain::Cognitive,
            SynergyType::Dynamic,
            "Cocoa boosts blood flow, Coffee boosts alertness.",
            &["Focus", "Work"],
        ),
        record(
            28,
            &["Rosemary", "Grilled Meat"],
            "Carcinogen Blocker",
            78,
            "Protect",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Kinetic,
            "Rosemary antioxidants neutralize toxins formed during grilling.",
            &["Safety", "BBQ"],
        ),
        record(
            29,
            &["Lentils", "Bell Pepper"],
            "Iron Salad",
            77,
            "3x",
            Evidence::Clinical,
            ImpactDomain::Metabolic,
            SynergyType::Kinetic,
            "Vitamin C helps absorb the iron in lentils.",
            &["Iron", "Energy"],
        ),
        record(
            30,
            &["Mushrooms", "Healthy Fats"],
            "Vitamin D Boost",
            76,
            "High",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Kinetic,
            "Vitamin D in mushrooms is fat-soluble.",
            &["Bone", "Immune"],
        ),
        record(
            31,
            &["Sourdough", "Vinegar"],
            "Blood Sugar Control",
            75,
            "High",
            Evidence::Clinical,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Vinegar lowers the glucose spike from bread.",
            &["Diet", "Energy"],
        ),
        record(
            32,
            &["Potato", "Olive Oil"],
            "Cooled Starch",
            74,
            "Medium",
            Evidence::Clinical,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Fat slows down the digestion of potato starch.",
            &["Diet", "Satiety"],
        ),
        record(
            33,
            &["Corn", "Beans"],
            "Taco Protein",
            73,
            "Additive",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Dynamic,
            "Traditional complete protein combination.",
            &["Muscle", "Vegan"],
        ),
        record(
            34,
            &["Chia Seeds", "Almond Milk"],
            "Omega Breakfast",
            72,
            "Additive",
            Evidence::Clinical,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "High fiber and healthy fats for sustained energy.",
            &["Breakfast", "Energy"],
        ),
        record(
            35,
            &["Blueberries", "Yogurt"],
            "Brain Breakfast",
            75,
            "Additive",
            Evidence::Clinical,
            ImpactDomain::Cognitive,
            SynergyType::Dynamic,
            "Fats help berry absorption, protein fuels neurotransmitters.",
            &["Brain", "Morning"],
        ),
        record(
            36,
            &["Almonds", "Dried Apricot"],
            "Trail Mix Synergy",
            71,
            "High",
            Evidence::Anecdotal,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Fat slows down the sugar spike from dried fruit.",
            &["Snack", "Energy"],
        ),
        record(
            37,
            &["Kimchi", "Fried Rice"],
            "Probiotic Rescue",
            70,
            "Medium",
            Evidence::Emerging,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Add Kimchi at the end to keep bacteria alive with starch.",
            &["Gut", "Taste"],
        ),
        record(
            38,
            &["Bone Broth", "Vitamin C"],
            "Collagen Builder",
            85,
            "Critical",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Kinetic,
            "You cannot build collagen without Vitamin C.",
            &["Skin", "Joints"],
        ),
        record(
            39,
            &["Spirulina", "Orange Juice"],
            "Green Iron",
            74,
            "High",
            Evidence::Clinical,
            ImpactDomain::Metabolic,
            SynergyType::Kinetic,
            "Masks taste and boosts iron absorption.",
            &["Health", "Smoothie"],
        ),
        record(
            40,
            &["Goji Berries", "Tea"],
            "Zen Energy",
            72,
            "Additive",
            Evidence::Anecdotal,
            ImpactDomain::Cognitive,
            SynergyType::Dynamic,
            "Antioxidants plus mild caffeine.",
            &["Calm", "Focus"],
        ),
        record(
            41,
            &["Acai", "Greek Yogurt"],
            "Super Bowl",
            75,
            "Additive",
            Evidence::Clinical,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "High protein meets high antioxidants.",
            &["Muscle", "Health"],
        ),
        record(
            42,
            &["Pomegranate", "Dates"],
            "Middle East Heart",
            74,
            "Synergistic",
            Evidence::Emerging,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Powerful polyphenols for heart health.",
            &["Heart", "Sweet"],
        ),
        record(
            43,
            &["Fig", "Walnut"],
            "Fiber & Fat",
            73,
            "Additive",
            Evidence::Clinical,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Classic pairing that stabilizes blood sugar.",
            &["Snack", "Gut"],
        ),
        record(
            44,
            &["Prunes", "Yogurt"],
            "Bone Defense",
            72,
            "Synergistic",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Dynamic,
            "Both proven to support bone density.",
            &["Bone", "Senior"],
        ),
        record(
            45,
            &["Kiwi", "Steak"],
            "Meat Tenderizer",
            71,
            "High",
            Evidence::Culinary,
            ImpactDomain::Metabolic,
            SynergyType::Kinetic,
            "Kiwi enzymes digest meat before you even eat it.",
            &["Digestion", "Food"],
        ),
        record(
            46,
            &["Mango", "Coconut Milk"],
            "Tropical Glow",
            75,
            "High",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Kinetic,
            "Fat helps absorb the Vitamin A for skin health.",
            &["Skin", "Beauty"],
        ),
        record(
            46,
            &["Melon", "Prosciutto"],
            "Sweet & Salty",
            70,
            "Additive",
            Evidence::Culinary,
            ImpactDomain::Physical,
            SynergyType::Dynamic,
            "Electrolytes from ham, hydration from melon.",
            &["Hydration", "Snack"],
        ),
        record(
            47,
            &["Peach", "Blackberry"],
            "Summer Shield",
            69,
            "Additive",
            Evidence::Emerging,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Varied antioxidants cover more cell protection.",
            &["Health"],
        ),
        record(
            48,
            &["Grapefruit", "Avocado"],
            "Slimming Salad",
            72,
            "Medium",
            Evidence::Anecdotal,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Fiber and healthy fats keep you full for hours.",
            &["Diet", "Weight"],
        ),
        record(
            49,
            &["Cabbage", "Caraway"],
            "Gas Relief",
            68,
            "High",
            Evidence::Traditional,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Seeds prevent the gas usually caused by cabbage.",
            &["Gut", "Comfort"],
        ),
        record(
            50,
            &["Quinoa", "Black Beans"],
            "Super Grain",
            74,
            "Additive",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Dynamic,
            "Complete amino acid profile for vegetarians.",
            &["Muscle", "Vegan"],
        ),
        record(
            51,
            &["Tempeh", "Turmeric"],
            "Golden Soy",
            75,
            "Synergistic",
            Evidence::Emerging,
            ImpactDomain::Immune,
            SynergyType::Dynamic,
            "Double anti-inflammatory effect.",
            &["Immune", "Gut"],
        ),
        record(
            52,
            &["Nutritional Yeast", "Kale"],
            "Vegan Power",
            73,
            "Additive",
            Evidence::Clinical,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Adds B12 and cheesy flavor to healthy greens.",
            &["Vegan", "Energy"],
        ),
        record(
            53,
            &["Hemp Seeds", "Salad"],
            "GLA Boost",
            72,
            "High",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Kinetic,
            "Adds rare Omega-6 GLA to leafy greens.",
            &["Skin", "Hormones"],
        ),
        record(
            54,
            &["Miso", "Scallions"],
            "Soup for Soul",
            71,
            "Additive",
            Evidence::Traditional,
            ImpactDomain::Immune,
            SynergyType::Dynamic,
            "Prebiotics and probiotics in a warm bowl.",
            &["Gut", "Immune"],
        ),
        record(
            55,
            &["Tofu", "Chili"],
            "Metabolic Heat",
            70,
            "Medium",
            Evidence::Emerging,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Capsaicin may increase calorie burn.",
            &["Diet", "Heat"],
        ),
        record(
            56,
            &["Edamame", "Seaweed"],
            "Thyroid Support",
            72,
            "High",
            Evidence::Clinical,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Iodine and protein support thyroid function.",
            &["Hormones"],
        ),
        record(
            57,
            &["Wheatgrass", "Orange"],
            "Green Shot",
            69,
            "High",
            Evidence::Anecdotal,
            ImpactDomain::Metabolic,
            SynergyType::Kinetic,
            "Vitamin C helps absorb plant-based minerals.",
            &["Detox", "Energy"],
        ),
        record(
            58,
            &["Maca", "Cacao"],
            "Inca Energy",
            73,
            "Synergistic",
            Evidence::Traditional,
            ImpactDomain::Cognitive,
            SynergyType::Dynamic,
            "Ancient combo for stamina and mood.",
            &["Energy", "Libido"],
        ),
        record(
            59,
            &["Chlorella", "Cilantro"],
            "Heavy Metal Detox",
            71,
            "Synergistic",
            Evidence::Anecdotal,
            ImpactDomain::Physical,
            SynergyType::Kinetic,
            "Often used together to bind toxins.",
            &["Detox"],
        ),
        record(
            60,
            &["Onion", "Grapes"],
            "Allergy Fighter",
            70,
            "Synergistic",
            Evidence::Emerging,
            ImpactDomain::Immune,
            SynergyType::Dynamic,
            "Quercetin + Resveratrol may lower histamine.",
            &["Allergy", "Immune"],
        ),
        record(
            61,
            &["Celery", "Peanut Butter"],
            "Classic Crunch",
            68,
            "Additive",
            Evidence::Culinary,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Fiber + Fat + Protein = Satisfaction.",
            &["Snack", "Diet"],
        ),
        record(
            62,
            &["Cucumber", "Vinegar"],
            "Cool Down",
            67,
            "Medium",
            Evidence::Traditional,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Low calorie, hydrating, insulin friendly.",
            &["Diet", "Summer"],
        ),
        record(
            63,
            &["Radish", "Butter"],
            "French Snack",
            66,
            "High",
            Evidence::Culinary,
            ImpactDomain::Metabolic,
            SynergyType::Kinetic,
            "Fat helps absorb the vitamins in radish.",
            &["Snack"],
        ),
        record(
            64,
            &["Peas", "Pasta"],
            "Green Carb",
            68,
            "Additive",
            Evidence::Culinary,
            ImpactDomain::Physical,
            SynergyType::Dynamic,
            "Adds protein to a carb-heavy meal.",
            &["Meal", "Energy"],
        ),
        record(
            65,
            &["Asparagus", "Parmesan"],
            "Umami Veggie",
            69,
            "Medium",
            Evidence::Culinary,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Fat helps absorb Vitamin E and K.",
            &["Taste", "Health"],
        ),
        record(
            66,
            &["Strawberries", "Spinach"],
            "Sweet Salad",
            72,
            "High",
            Evidence::Clinical,
            ImpactDomain::Metabolic,
            SynergyType::Kinetic,
            "Vitamin C in berries aids Iron absorption.",
            &["Salad", "Iron"],
        ),
        record(
            67,
            &["Bok Choy", "Garlic"],
            "Immune Stir-fry",
            74,
            "Additive",
            Evidence::Traditional,
            ImpactDomain::Immune,
            SynergyType::Dynamic,
            "Sulforaphane plus Allicin.",
            &["Immune", "Dinner"],
        ),
        record(
            68,
            &["Cauliflower", "Curry"],
            "Golden Veg",
            76,
            "Synergistic",
            Evidence::Traditional,
            ImpactDomain::Physical,
            SynergyType::Kinetic,
            "Turmeric binds to the fiber matrix.",
            &["Health", "Taste"],
        ),
        record(
            69,
            &["Eggplant", "Olive Oil"],
            "Brain Food",
            71,
            "High",
            Evidence::Clinical,
            ImpactDomain::Cognitive,
            SynergyType::Kinetic,
            "Nasunin in skin protects brain fats.",
            &["Brain", "Antioxidant"],
        ),
        record(
            70,
            &["Zucchini", "Tomato"],
            "Garden Duo",
            70,
            "Additive",
            Evidence::Culinary,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Low calorie volume eating.",
            &["Diet"],
        ),
        record(
            71,
            &["Artichoke", "Lemon"],
            "Liver Lover",
            73,
            "Synergistic",
            Evidence::Traditional,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Cynarin and Vitamin C support liver.",
            &["Liver", "Detox"],
        ),
        record(
            72,
            &["Beets", "Goat Cheese"],
            "Performance Salad",
            74,
            "Medium",
            Evidence::Culinary,
            ImpactDomain::Physical,
            SynergyType::Dynamic,
            "Nitrates plus medium-chain fats.",
            &["Energy", "Taste"],
        ),
        record(
            73,
            &["Pumpkin", "Cinnamon"],
            "Blood Sugar Spice",
            72,
            "Synergistic",
            Evidence::Clinical,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Cinnamon controls the sugar spike.",
            &["Diet", "Sweet"],
        ),
        record(
            74,
            &["Banana", "Almond Butter"],
            "Runner Fuel",
            76,
            "Additive",
            Evidence::Sports,
            ImpactDomain::Physical,
            SynergyType::Dynamic,
            "Potassium plus sustained energy.",
            &["Workout", "Energy"],
        ),
        record(
            75,
            &["Oysters", "Lemon"],
            "Zinc Zing",
            78,
            "Medium",
            Evidence::Traditional,
            ImpactDomain::Immune,
            SynergyType::Kinetic,
            "Acid helps release minerals.",
            &["Libido", "Immune"],
        ),
        record(
            76,
            &["Sardines", "Tomato Sauce"],
            "Calcium Bone",
            79,
            "High",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Kinetic,
            "Acid helps dissolve bones for calcium.",
            &["Bone", "Health"],
        ),
        record(
            77,
            &["Tuna", "Olive Oil"],
            "Heart Lunch",
            75,
            "High",
            Evidence::Clinical,
            ImpactDomain::Metabolic,
            SynergyType::Kinetic,
            "Protects omega-3s from oxidation.",
            &["Heart", "Lunch"],
        ),
        record(
            78,
            &["Cod", "Red Pepper"],
            "Light & Bright",
            72,
            "Medium",
            Evidence::Culinary,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Lean protein with Vitamin C.",
            &["Diet", "Dinner"],
        ),
        record(
            79,
            &["Shrimp", "Garlic"],
            "Immune Seafood",
            73,
            "Additive",
            Evidence::Traditional,
            ImpactDomain::Immune,
            SynergyType::Dynamic,
            "Selenium plus Allicin.",
            &["Immune", "Taste"],
        ),
        record(
            80,
            &["Turkey", "Cranberry"],
            "Thanksgiving Nap",
            70,
            "Medium",
            Evidence::Traditional,
            ImpactDomain::Cognitive,
            SynergyType::Dynamic,
            "Carbs help Tryptophan enter brain.",
            &["Sleep", "Comfort"],
        ),
        record(
            81,
            &["Chicken", "Rice"],
            "Recovery Meal",
            75,
            "Additive",
            Evidence::Sports,
            ImpactDomain::Physical,
            SynergyType::Dynamic,
            "Easy to digest protein and carbs.",
            &["Recovery", "Gut"],
        ),
        record(
            82,
            &["Beef", "Broccoli"],
            "Iron & C",
            77,
            "High",
            Evidence::Clinical,
            ImpactDomain::Physical,
            SynergyType::Kinetic,
            "Classic gym meal for iron absorption.",
            &["Muscle", "Iron"],
        ),
        record(
            83,
            &["Lamb", "Mint"],
            "Digestion Aid",
            71,
            "Medium",
            Evidence::Traditional,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Mint helps digest fatty meat.",
            &["Digestion", "Taste"],
        ),
        record(
            84,
            &["Pork", "Apple Sauce"],
            "Sweet Protein",
            70,
            "Medium",
            Evidence::Traditional,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Fiber helps process the fat.",
            &["Meal", "Taste"],
        ),
        record(
            85,
            &["Duck", "Orange"],
            "Fat Cutter",
            72,
            "Medium",
            Evidence::Traditional,
            ImpactDomain::Metabolic,
            SynergyType::Dynamic,
            "Acid cuts through the heavy fat.",
            &["Taste", "Digestion"],
        ),
        record(
            86,
            &["Venison", "Berries"],
            "Forest Feast",
            74,
            "Medium",
            Evidence::Traditional,
            ImpactDomain::Physical,
            SynergyType::Dynamic,
            "Lean meat with antioxidants.",
            &["Health", "Paleo"],
        ),
        record(
            87,
            &["Bison", "Sweet Potato"],
            "Paleo Power",
            76,
            "Additive",
            Evidence::Sports,
            ImpactDomain::Physical,
            SynergyType::Dynamic,
            "Top tier recovery meal for athletes.",
            &["Muscle", "Recovery"],
        ),
    ];
}

/// The full catalog in its seeded order.
pub fn catalog() -> &'static [SynergyRecord] {
    &CATALOG
}

/// Every record carrying `rank`. Ranks are not unique, so this can return
/// more than one record.
pub fn find_by_rank(rank: u32) -> Vec<&'static SynergyRecord> {
    CATALOG.iter().filter(|r| r.rank == rank).collect()
}

/// The distinct goal tags used anywhere in the catalog, in first-seen order.
pub fn all_tags() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = Vec::new();
    for tag in CATALOG.iter().flat_map(|r| r.tags.iter()) {
        if !tags.contains(&tag.as_str()) {
            tags.push(tag.as_str());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_seeded_in_rank_order() {
        let records = catalog();
        assert_eq!(records.len(), 88);
        assert_eq!(records[0].name, "The Golden Trio");
        assert_eq!(records.last().unwrap().name, "Paleo Power");
        assert!(records.windows(2).all(|w| w[0].rank <= w[1].rank));
    }

    #[test]
    fn every_record_pairs_two_or_three_ingredients() {
        for record in catalog() {
            assert!(
                (2..=3).contains(&record.ingredients.len()),
                "{} has {} ingredients",
                record.name,
                record.ingredients.len()
            );
            assert!(record.ingredients.iter().all(|i| !i.trim().is_empty()));
            assert!(record.magnitude <= 100);
        }
    }

    #[test]
    fn duplicate_rank_is_kept() {
        let shared = find_by_rank(46);
        let names: Vec<&str> = shared.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Tropical Glow", "Sweet & Salty"]);
        assert!(find_by_rank(0).is_empty());
    }

    #[test]
    fn record_serializes_with_wire_names() {
        let value = serde_json::to_value(&catalog()[5]).unwrap();
        assert_eq!(value["type"], "Dynamic");
        assert_eq!(value["domain"], "Cognitive");
        assert_eq!(value["ingredients"][1], "L-Theanine");
    }

    #[test]
    fn trios_are_labelled() {
        assert_eq!(catalog()[0].kind(), SynergyKind::Trio);
        assert_eq!(catalog()[5].kind(), SynergyKind::Duo);
    }

    #[test]
    fn goal_chips_start_with_all() {
        assert_eq!(GOAL_CHIPS[0].id, "All");
        let tags = all_tags();
        for chip in &GOAL_CHIPS[1..] {
            assert!(tags.contains(&chip.id), "no record tagged {}", chip.id);
        }
    }
}
