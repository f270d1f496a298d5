use rand::seq::IndexedRandom;
use rand::Rng;

pub const FINANCE_QUOTES: [&str; 4] = [
    "💰 'Do not save what is left after spending, but spend what is left after saving.' - Warren Buffett",
    "📈 'The stock market is filled with individuals who know the price of everything, but the value of nothing.' - Philip Fisher",
    "🏦 'A budget tells your money where to go instead of wondering where it went.' - Dave Ramsey",
    "🛍️ 'Too many people spend money they haven't earned to buy things they don’t want to impress people they don’t like.' - Will Rogers",
];

/// Picks one quote uniformly at random.
pub fn pick_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FINANCE_QUOTES.choose(rng).copied().unwrap_or(FINANCE_QUOTES[0])
}

pub fn random_quote() -> &'static str {
    pick_quote(&mut rand::rng())
}
