//! Statically embedded markup substituted when a fragment fetch fails. Each section owns
//! its own template; there is no generic fallback. Templates are resolved through a
//! lookup table keyed by container id so the markup stays out of the control flow.

const HEADER: &str = r#"
    <header class="header">
        <div class="container">
            <div class="header-content">
                <a href="index.html" class="logo">
                    <img src="pict/princess512.jpg" alt="Princess Run 3D Logo">
                    <span>Princess Run 3D</span>
                </a>
                <nav>
                    <ul class="nav-menu">
                        <li><a href="index.html">Home</a></li>
                        <li><a href="prin-new.html">News</a></li>
                        <li><a href="prin-contacts.html">Contacts</a></li>
                        <li><a href="prin-privacy.html">Privacy</a></li>
                    </ul>
                </nav>
            </div>
        </div>
    </header>
"#;

const HERO: &str = r#"
    <section class="hero">
        <div class="container">
            <div class="hero-content">
                <h1>Welcome to Princess Run 3D</h1>
                <p>Experience the ultimate princess adventure in a 3D world!</p>
                <a href="game.html" class="cta-button">Play Now</a>
            </div>
        </div>
    </section>
"#;

const GAME: &str = r#"
    <section class="game-section">
        <div class="container">
            <h2>Game Features</h2>
            <div class="game-grid">
                <div class="game-card">
                    <img src="pict/princess-run.jpg" alt="Princess Run">
                    <h3>Princess Run</h3>
                    <p>Run, jump, and dodge obstacles in a beautiful 3D world.</p>
                </div>
                <div class="game-card">
                    <img src="pict/princess-dress.jpg" alt="Princess Dress">
                    <h3>Princess Dress</h3>
                    <p>Customize your princess with various outfits and accessories.</p>
                </div>
                <div class="game-card">
                    <img src="pict/princess-crown.jpg" alt="Princess Crown">
                    <h3>Princess Crown</h3>
                    <p>Earn crowns and unlock new achievements.</p>
                </div>
            </div>
        </div>
    </section>
"#;

const FEATURES: &str = r#"
    <section class="features-section">
        <div class="container">
            <h2>Game Features</h2>
            <div class="features-grid">
                <div class="feature-card">
                    <img src="pict/feature1.jpg" alt="Feature 1">
                    <h3>3D Graphics</h3>
                    <p>Experience stunning 3D graphics and animations.</p>
                </div>
                <div class="feature-card">
                    <img src="pict/feature2.jpg" alt="Feature 2">
                    <h3>Smooth Controls</h3>
                    <p>Easy-to-use controls for all ages.</p>
                </div>
                <div class="feature-card">
                    <img src="pict/feature3.jpg" alt="Feature 3">
                    <h3>Endless Fun</h3>
                    <p>Play endlessly and enjoy the game.</p>
                </div>
            </div>
        </div>
    </section>
"#;

const HOW_TO_PLAY: &str = r#"
    <section class="how-to-play-section">
        <div class="container">
            <h2>How to Play</h2>
            <div class="how-to-play-grid">
                <div class="how-to-play-card">
                    <img src="pict/how-to-play1.jpg" alt="How to Play 1">
                    <h3>Run and Jump</h3>
                    <p>Use the arrow keys to run and jump over obstacles.</p>
                </div>
                <div class="how-to-play-card">
                    <img src="pict/how-to-play2.jpg" alt="How to Play 2">
                    <h3>Dodge Enemies</h3>
                    <p>Avoid enemies by jumping or dodging.</p>
                </div>
                <div class="how-to-play-card">
                    <img src="pict/how-to-play3.jpg" alt="How to Play 3">
                    <h3>Collect Items</h3>
                    <p>Collect coins and power-ups to enhance your princess.</p>
                </div>
            </div>
        </div>
    </section>
"#;

const FIELD_DESCRIPTION: &str = r#"
    <section class="field-description-section">
        <div class="container">
            <h2>Game Field</h2>
            <p>The game field is a beautiful 3D landscape filled with various obstacles and challenges. Your princess must navigate through this field to reach the end.</p>
            <p>Along the way, she will encounter enemies, collect items, and overcome obstacles to become the ultimate princess.</p>
        </div>
    </section>
"#;

const REVIEWS: &str = r#"
    <section class="reviews-section">
        <div class="container">
            <h2>What Players Say</h2>
            <div class="reviews-grid">
                <div class="review-card">
                    <p>"This game is amazing! I love the 3D graphics and smooth controls."</p>
                    <p>- Sarah, 5 stars</p>
                </div>
                <div class="review-card">
                    <p>"The princess dress customization is so much fun!"</p>
                    <p>- Alex, 5 stars</p>
                </div>
                <div class="review-card">
                    <p>"I can't get enough of this game. It's addictive!"</p>
                    <p>- Emma, 5 stars</p>
                </div>
            </div>
        </div>
    </section>
"#;

const NEWS_SECTION: &str = r#"
    <section class="news-section">
        <div class="container">
            <h2>Latest News</h2>
            <div class="news-grid">
                <div class="news-card">
                    <h3>New Update Available!</h3>
                    <p>We've added a new princess outfit and a new game mode. Check it out!</p>
                    <p>Date: December 22, 2024</p>
                </div>
                <div class="news-card">
                    <h3>Game Contest Announced!</h3>
                    <p>Win a free princess dress by participating in our latest contest.</p>
                    <p>Date: December 21, 2024</p>
                </div>
            </div>
        </div>
    </section>
"#;

const ADDITIONAL_SECTION: &str = r#"
    <section class="additional-section">
        <div class="container">
            <div class="additional-content">
                <div class="additional-text">
                    <h2>More About the Game</h2>
                    <p>Extra details about the game and its features live here.</p>
                    <p>Use this section to extend the content of the page.</p>
                </div>
                <div class="additional-image">
                    <img src="pict/princess-section3.jpg" alt="Princess Section 3" class="princess-img">
                </div>
            </div>
        </div>
    </section>
"#;

const FOOTER: &str = r#"
    <footer class="footer">
        <div class="footer-container">
            <div class="footer-content">
                <div class="footer-section">
                    <h3>Quick Links</h3>
                    <ul class="footer-links">
                        <li><a href="index.html">Home</a></li>
                        <li><a href="prin-new.html">News</a></li>
                        <li><a href="prin-contacts.html">Contacts</a></li>
                        <li><a href="prin-privacy.html">Privacy Policy</a></li>
                    </ul>
                </div>
                <div class="footer-section">
                    <h3>Contact Information</h3>
                    <div class="contact-info">
                        <div class="contact-item">
                            <span class="contact-icon">&#128231;</span>
                            <span>contact@virtualherotrek.com</span>
                        </div>
                        <div class="contact-item">
                            <span class="contact-icon">&#128222;</span>
                            <span>+44 77 151 1234</span>
                        </div>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>&copy; <span id="current-year"></span> <a href="https://virtualherotrek.com">Virtualherotrek.com</a>. All rights reserved.</p>
            </div>
        </div>
    </footer>
"#;

/// Mapping between container ids and the fallback markup for that section.
const TEMPLATES: &[(&str, &str)] = &[
    ("header-placeholder", HEADER),
    ("hero-placeholder", HERO),
    ("game-placeholder", GAME),
    ("features-placeholder", FEATURES),
    ("how-to-play-placeholder", HOW_TO_PLAY),
    ("field-description-placeholder", FIELD_DESCRIPTION),
    ("reviews-placeholder", REVIEWS),
    ("news-section-placeholder", NEWS_SECTION),
    ("additional-section-placeholder", ADDITIONAL_SECTION),
    ("footer-placeholder", FOOTER),
];

/// Look up the fallback template for a container id.
pub fn template(container_id: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(id, _)| *id == container_id)
        .map(|(_, template)| *template)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sections_resolve() {
        assert!(template("header-placeholder").is_some());
        assert!(template("footer-placeholder").is_some());
    }

    #[test]
    fn unknown_sections_do_not() {
        assert_eq!(template("sidebar-placeholder"), None);
    }
}
