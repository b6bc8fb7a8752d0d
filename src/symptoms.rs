use serde::Serialize;

/// Condition identifiers known to the diagnosis engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Chlorosis,
    Spots,
    Wilting,
    Pests,
    Dry,
    Mold,
    Holes,
    Frail,
    Damaged,
    Stunted,
    LeafDrop,
    Curling,
    RootRot,
    Sunburn,
    Healthy,
}

/// Severity tier attached to each symptom record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Mild,
    Moderate,
    High,
}

/// One entry of the static symptom knowledge base: display fields, clues
/// and care advice for a condition. Built into the binary, never mutated.
#[derive(Debug)]
pub struct Symptom {
    pub condition: Condition,
    pub name: &'static str,
    pub emoji: &'static str,
    pub severity: Severity,
    pub clues: &'static [&'static str],
    pub advice: &'static str,
    pub treatment: &'static str,
}

impl Condition {
    /// Look up the knowledge-base record for this condition.
    pub fn symptom(self) -> &'static Symptom {
        match self {
            Condition::Chlorosis => &CHLOROSIS,
            Condition::Spots => &SPOTS,
            Condition::Wilting => &WILTING,
            Condition::Pests => &PESTS,
            Condition::Dry => &DRY,
            Condition::Mold => &MOLD,
            Condition::Holes => &HOLES,
            Condition::Frail => &FRAIL,
            Condition::Damaged => &DAMAGED,
            Condition::Stunted => &STUNTED,
            Condition::LeafDrop => &LEAF_DROP,
            Condition::Curling => &CURLING,
            Condition::RootRot => &ROOT_ROT,
            Condition::Sunburn => &SUNBURN,
            Condition::Healthy => &HEALTHY,
        }
    }
}

/// All knowledge-base entries, for iteration and consistency checks.
pub static SYMPTOM_DB: &[&Symptom] = &[
    &CHLOROSIS, &SPOTS, &WILTING, &PESTS, &DRY, &MOLD, &HOLES, &FRAIL, &DAMAGED, &STUNTED,
    &LEAF_DROP, &CURLING, &ROOT_ROT, &SUNBURN, &HEALTHY,
];

static CHLOROSIS: Symptom = Symptom {
    condition: Condition::Chlorosis,
    name: "Yellowing / Chlorosis",
    emoji: "\u{1F7E1}",
    severity: Severity::Moderate,
    clues: &[
        "Leaf color shifts from green → yellow",
        "Uniform yellowing or pale veins",
        "Reduced green-channel intensity",
        "No visible spots or holes",
    ],
    advice: "Check soil moisture and nutrient levels. Apply nitrogen-rich or iron-chelate fertilizer based on which leaves are affected.",
    treatment: "For older leaf yellowing: Apply nitrogen fertilizer. For new leaf yellowing: Apply iron chelate. Adjust watering schedule.",
};

static SPOTS: Symptom = Symptom {
    condition: Condition::Spots,
    name: "Leaf Spots / Lesions",
    emoji: "\u{1F7E4}",
    severity: Severity::Moderate,
    clues: &[
        "Circular or irregular dark spots",
        "Brown, black, or rust-colored areas",
        "Spots may have yellow halos",
        "Localized damage (not whole leaf)",
    ],
    advice: "Remove affected leaves immediately to prevent spread. Avoid overhead watering.",
    treatment: "Prune infected leaves. Apply copper-based fungicide or neem oil every 7-10 days.",
};

static WILTING: Symptom = Symptom {
    condition: Condition::Wilting,
    name: "Wilting / Drooping",
    emoji: "\u{1F940}",
    severity: Severity::High,
    clues: &[
        "Leaves hang downward",
        "Loss of leaf firmness (turgor)",
        "Stem bending or leaning",
        "Reduced leaf surface area facing upward",
    ],
    advice: "Check soil moisture immediately. If dry, water deeply. If wet, check for root rot.",
    treatment: "For underwatering: Deep water and mist leaves. For overwatering: Stop watering, check roots, repot if needed.",
};

static PESTS: Symptom = Symptom {
    condition: Condition::Pests,
    name: "Pest Presence",
    emoji: "\u{1F41B}",
    severity: Severity::Moderate,
    clues: &[
        "Small moving objects on leaves/stems",
        "Clusters near leaf veins or undersides",
        "Sticky residue (honeydew)",
        "Leaf distortion without discoloration",
    ],
    advice: "Isolate the plant. Spray with neem oil solution or insecticidal soap.",
    treatment: "Apply neem oil spray every 3-5 days for 2 weeks. Remove heavily infested leaves.",
};

static DRY: Symptom = Symptom {
    condition: Condition::Dry,
    name: "Dry / Brittle / Crispy Leaves",
    emoji: "\u{1F342}",
    severity: Severity::Mild,
    clues: &[
        "Brown, dry leaf edges",
        "Cracking or splitting",
        "Leaves appear thinner and curled",
        "No softness or flexibility",
    ],
    advice: "Increase watering frequency. Check if root-bound. Increase humidity.",
    treatment: "Water deeply when top 2 inches are dry. Mist leaves daily. Move to less windy location.",
};

static MOLD: Symptom = Symptom {
    condition: Condition::Mold,
    name: "Mold / Powdery Mildew",
    emoji: "\u{1F32B}\u{FE0F}",
    severity: Severity::Moderate,
    clues: &[
        "White powdery coating on leaves",
        "Fuzzy or dusty surface texture",
        "Surface-level growth (even micro-patches)",
        "Often starts in shaded areas",
    ],
    advice: "Improve air circulation. Remove affected leaves. Reduce humidity around the plant.",
    treatment: "Apply baking soda solution (1 tsp per quart water) or sulfur-based fungicide weekly.",
};

static HOLES: Symptom = Symptom {
    condition: Condition::Holes,
    name: "Chewed / Holed Leaves",
    emoji: "\u{1F573}\u{FE0F}",
    severity: Severity::Mild,
    clues: &[
        "Missing leaf tissue (includes micro-punctures)",
        "Round or irregular holes",
        "Edges appear torn or jagged",
        "Damage pattern inconsistent with disease",
    ],
    advice: "Inspect plant at night when pests are active. Hand-pick visible pests.",
    treatment: "Apply diatomaceous earth around base. Use Bt (Bacillus thuringiensis) for caterpillars.",
};

static FRAIL: Symptom = Symptom {
    condition: Condition::Frail,
    name: "Weakened / Frail Leaves",
    emoji: "\u{1F331}",
    severity: Severity::Moderate,
    clues: &[
        "Leaves appear thin or translucent",
        "Pale color with low saturation",
        "Lack of structural rigidity",
        "General appearance of being 'frail'",
    ],
    advice: "Provide more stable environment and balanced nutrients. Avoid sudden temperature changes.",
    treatment: "Use a diluted liquid seaweed fertilizer. Ensure consistent hydration without overwatering.",
};

static DAMAGED: Symptom = Symptom {
    condition: Condition::Damaged,
    name: "General Physical Damage",
    emoji: "\u{1FA79}",
    severity: Severity::Mild,
    clues: &[
        "Physical tears or jagged edges",
        "Bruising or crushed tissue",
        "Broken stems or leaf tips",
        "Localized mechanical stress",
    ],
    advice: "Prune away heavily damaged parts to save energy for new growth.",
    treatment: "Seal large stem wounds with pruning sealer if necessary. Support weakened branches with stakes.",
};

static STUNTED: Symptom = Symptom {
    condition: Condition::Stunted,
    name: "Stunted / Slow Growth",
    emoji: "\u{1F4C9}",
    severity: Severity::Mild,
    clues: &[
        "Smaller-than-normal leaves",
        "No new growth over time",
        "Short internode spacing",
        "Overall compact appearance",
    ],
    advice: "Check if plant needs repotting. Ensure adequate light. Fertilize with balanced fertilizer.",
    treatment: "Repot if root-bound. Apply slow-release fertilizer. Increase light exposure.",
};

static LEAF_DROP: Symptom = Symptom {
    condition: Condition::LeafDrop,
    name: "Leaf Drop / Shedding",
    emoji: "\u{1F343}",
    severity: Severity::Moderate,
    clues: &[
        "Reduced leaf count",
        "Bare stems",
        "Fallen leaves near base",
        "Leaves may drop green or yellow",
    ],
    advice: "Determine if natural (seasonal) or stress-related. Check soil moisture.",
    treatment: "Maintain consistent watering. Avoid temperature extremes. Reduce stress factors.",
};

static CURLING: Symptom = Symptom {
    condition: Condition::Curling,
    name: "Leaf Curling / Distortion",
    emoji: "\u{1F300}",
    severity: Severity::Moderate,
    clues: &[
        "Leaves curl upward or downward",
        "Twisted or uneven shape",
        "Thickened or puckered tissue",
        "Often paired with pest signs",
    ],
    advice: "Check for pests on leaf undersides. If no pests, may be viral - isolate plant.",
    treatment: "Treat for pests with neem oil. Apply balanced fertilizer. Remove severely affected leaves.",
};

static ROOT_ROT: Symptom = Symptom {
    condition: Condition::RootRot,
    name: "Root Rot / Soggy Soil",
    emoji: "\u{1F4A7}",
    severity: Severity::High,
    clues: &[
        "Soil appears dark and wet",
        "Leaves wilt despite moist soil",
        "Stem base darkened",
        "Roots (if visible) brown/black",
    ],
    advice: "Stop watering immediately. Remove plant from pot. Trim all brown/mushy roots.",
    treatment: "Repot with fresh, well-draining soil. Water sparingly until recovery. Apply root stimulator.",
};

static SUNBURN: Symptom = Symptom {
    condition: Condition::Sunburn,
    name: "Sunburn / Scorching",
    emoji: "\u{2600}\u{FE0F}",
    severity: Severity::Mild,
    clues: &[
        "Bleached or white patches",
        "Brown crispy areas exposed to sun",
        "Damage localized to sun-facing leaves",
        "Sudden onset after relocation",
    ],
    advice: "Move plant to location with filtered light or morning sun only.",
    treatment: "Relocate to shadier spot. Mist leaves to cool. Prune severely damaged leaves.",
};

static HEALTHY: Symptom = Symptom {
    condition: Condition::Healthy,
    name: "Healthy Plant",
    emoji: "\u{2705}",
    severity: Severity::None,
    clues: &[
        "Leaf color is uniform and vibrant green",
        "No discoloration, spots, or lesions",
        "Leaves are firm, full, and smooth",
        "Leaf edges are intact (no holes or tears)",
        "Leaves face upward or outward (good turgor)",
    ],
    advice: "Your plant is thriving! Continue your current care routine.",
    treatment: "Maintain consistent watering, light, and feeding schedule.",
};
