use serde::{Deserialize, Serialize};

use super::domain::{traits, TraitScores};

/// Personality types a submission can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Personality {
    TechExplorer,
    CreativeInnovator,
    AthleticChampion,
    SocialChangemaker,
    LiteraryThinker,
    NaturalLeader,
    VersatileAllRounder,
}

/// Tie-break order: the first trait holding the maximum decides.
const PRIORITY: [(&str, Personality); 6] = [
    (traits::TECHNICAL, Personality::TechExplorer),
    (traits::CREATIVE, Personality::CreativeInnovator),
    (traits::SPORTS, Personality::AthleticChampion),
    (traits::SOCIAL, Personality::SocialChangemaker),
    (traits::LITERARY, Personality::LiteraryThinker),
    (traits::LEADERSHIP, Personality::NaturalLeader),
];

impl Personality {
    /// Classifies a score vector. No classifying trait above zero means all-rounder.
    pub fn classify(scores: &TraitScores) -> Self {
        let max = PRIORITY
            .iter()
            .map(|(name, _)| scores.get(name))
            .max()
            .unwrap_or(0);

        if max == 0 {
            return Personality::VersatileAllRounder;
        }

        PRIORITY
            .iter()
            .find(|(name, _)| scores.get(name) == max)
            .map(|(_, personality)| *personality)
            .unwrap_or(Personality::VersatileAllRounder)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Personality::TechExplorer => "Tech Explorer 🚀",
            Personality::CreativeInnovator => "Creative Innovator 🎨",
            Personality::AthleticChampion => "Athletic Champion 🏆",
            Personality::SocialChangemaker => "Social Changemaker 🌟",
            Personality::LiteraryThinker => "Literary Thinker 📚",
            Personality::NaturalLeader => "Natural Leader 👑",
            Personality::VersatileAllRounder => "Versatile All-Rounder 🌈",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Personality::TechExplorer => "You're a problem solver who loves building and creating with technology. Technical clubs will help you thrive!",
            Personality::CreativeInnovator => "You express yourself through art and creativity. Cultural and creative clubs are perfect for you!",
            Personality::AthleticChampion => "You're competitive and love physical challenges. Sports clubs will channel your energy perfectly!",
            Personality::SocialChangemaker => "You're passionate about people and making an impact. Social and community clubs suit you best!",
            Personality::LiteraryThinker => "You love ideas, words, and meaningful discussions. Literary and debate clubs are your domain!",
            Personality::NaturalLeader => "You excel at organizing and leading others. Management and leadership clubs will polish your skills!",
            Personality::VersatileAllRounder => "You have diverse interests and can thrive in multiple types of clubs. Explore different options!",
        }
    }
}
