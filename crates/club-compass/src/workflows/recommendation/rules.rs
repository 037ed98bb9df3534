use crate::workflows::catalog::ClubDomain;
use crate::workflows::quiz::domain::traits;

/// Ties a club domain to the trait that signals interest in it.
pub(crate) struct DomainAffinity {
    pub domain: ClubDomain,
    pub trait_key: &'static str,
    pub reason: &'static str,
}

/// Domain-independent bonus awarded when a trait clears its threshold.
pub(crate) struct TraitBonus {
    pub trait_key: &'static str,
    pub points: u32,
    pub reason: &'static str,
}

/// Trait score must exceed this for the domain affinity to apply.
pub(crate) const AFFINITY_THRESHOLD: u32 = 5;
pub(crate) const AFFINITY_MULTIPLIER: u32 = 10;
/// Trait score must exceed this for a bonus to apply.
pub(crate) const BONUS_THRESHOLD: u32 = 4;

pub(crate) static DOMAIN_AFFINITIES: [DomainAffinity; 6] = [
    DomainAffinity {
        domain: ClubDomain::Technical,
        trait_key: traits::TECHNICAL,
        reason: "strong technical interest",
    },
    DomainAffinity {
        domain: ClubDomain::Cultural,
        trait_key: traits::CREATIVE,
        reason: "creative mindset",
    },
    DomainAffinity {
        domain: ClubDomain::Sports,
        trait_key: traits::SPORTS,
        reason: "athletic inclination",
    },
    DomainAffinity {
        domain: ClubDomain::Management,
        trait_key: traits::LEADERSHIP,
        reason: "leadership qualities",
    },
    DomainAffinity {
        domain: ClubDomain::Literary,
        trait_key: traits::LITERARY,
        reason: "literary interests",
    },
    DomainAffinity {
        domain: ClubDomain::Social,
        trait_key: traits::SOCIAL,
        reason: "social consciousness",
    },
];

pub(crate) static TRAIT_BONUSES: [TraitBonus; 3] = [
    TraitBonus {
        trait_key: traits::COMPETITIVE,
        points: 20,
        reason: "competitive spirit",
    },
    TraitBonus {
        trait_key: traits::TEAMWORK,
        points: 15,
        reason: "team player",
    },
    TraitBonus {
        trait_key: traits::COMMUNICATION,
        points: 15,
        reason: "strong communication skills",
    },
];

pub(crate) fn affinity_for(domain: ClubDomain) -> Option<&'static DomainAffinity> {
    DOMAIN_AFFINITIES
        .iter()
        .find(|affinity| affinity.domain == domain)
}
