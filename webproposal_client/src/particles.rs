use yew::{html, Component, ComponentLink, Html, Properties, ShouldRender};

pub const DEFAULT_PARTICLE_COUNT: u32 = 30;

/// One decorative heart drifting in the background. Values are drawn
/// once and handed to the styling layer, which owns the actual motion.
pub struct ParticleDescriptor {
    left_vw: f64,
    size_px: f64,
    duration_s: f64,
    delay_s: f64,
}

impl ParticleDescriptor {
    /// Samples the four animation parameters from `rng`, which must
    /// yield values in [0, 1).
    pub fn draw(rng: &mut impl FnMut() -> f64) -> Self {
        Self {
            // Horizontal position across the whole viewport.
            left_vw: rng() * 100.0,
            // 10px to 35px, the small ones read as further away.
            size_px: rng() * 25.0 + 10.0,
            // 8s to 20s, the fast ones give a sense of depth.
            duration_s: rng() * 12.0 + 8.0,
            // Staggered start so they do not all rise at once.
            delay_s: rng() * 5.0,
        }
    }

    pub fn left_vw(&self) -> f64 {
        self.left_vw
    }

    pub fn size_px(&self) -> f64 {
        self.size_px
    }

    pub fn duration_s(&self) -> f64 {
        self.duration_s
    }

    pub fn delay_s(&self) -> f64 {
        self.delay_s
    }

    /// Inline style consumed by the `.heart-particle` animation rules.
    pub fn style(&self) -> String {
        format!(
            "left: {}vw; font-size: {}px; animation-duration: {}s; animation-delay: {}s;",
            self.left_vw, self.size_px, self.duration_s, self.delay_s
        )
    }
}

/// Draws exactly `count` independent descriptors.
pub fn draw_field(count: u32, mut rng: impl FnMut() -> f64) -> Vec<ParticleDescriptor> {
    (0..count).map(|_| ParticleDescriptor::draw(&mut rng)).collect()
}

#[derive(Clone, Properties)]
pub struct Props {
    #[prop_or(DEFAULT_PARTICLE_COUNT)]
    pub count: u32,
}

/// Background of floating hearts. Descriptors are drawn once at
/// creation; after that the motion is pure CSS, no update loop.
pub struct ParticleField {
    particles: Vec<ParticleDescriptor>,
}

impl Component for ParticleField {
    type Message = ();
    type Properties = Props;

    fn create(props: Self::Properties, _link: ComponentLink<Self>) -> Self {
        ParticleField {
            particles: draw_field(props.count, js_sys::Math::random),
        }
    }

    fn update(&mut self, _msg: Self::Message) -> ShouldRender {
        false
    }

    fn change(&mut self, _props: Self::Properties) -> ShouldRender {
        // The field is drawn once, a later count change is ignored.
        false
    }

    fn view(&self) -> Html {
        html! {
            <div class="bg-animation-container">
                { for self.particles.iter().map(|particle| html! {
                    <div class="heart-particle" style=particle.style()>{ "❤" }</div>
                }) }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cycles through fixed samples, covering both ends of [0, 1).
    fn cycling_rng(samples: Vec<f64>) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = samples[i % samples.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn test_descriptor_ranges() {
        let mut rng = cycling_rng(vec![0.0, 0.25, 0.5, 0.75, 0.999999]);
        for _ in 0..100 {
            let p = ParticleDescriptor::draw(&mut rng);
            assert!((0.0..100.0).contains(&p.left_vw()));
            assert!((10.0..35.0).contains(&p.size_px()));
            assert!((8.0..20.0).contains(&p.duration_s()));
            assert!((0.0..5.0).contains(&p.delay_s()));
        }
    }

    #[test]
    fn test_descriptor_extremes() {
        let low = ParticleDescriptor::draw(&mut || 0.0);
        assert_eq!(low.left_vw(), 0.0);
        assert_eq!(low.size_px(), 10.0);
        assert_eq!(low.duration_s(), 8.0);
        assert_eq!(low.delay_s(), 0.0);

        let high = ParticleDescriptor::draw(&mut || 0.999);
        assert!(high.left_vw() < 100.0);
        assert!(high.size_px() < 35.0);
        assert!(high.duration_s() < 20.0);
        assert!(high.delay_s() < 5.0);
    }

    #[test]
    fn test_field_count() {
        let mut rng = cycling_rng(vec![0.1, 0.6, 0.3]);
        assert_eq!(draw_field(0, &mut rng).len(), 0);
        assert_eq!(draw_field(1, &mut rng).len(), 1);
        assert_eq!(draw_field(40, &mut rng).len(), 40);
    }

    #[test]
    fn test_style_carries_all_properties() {
        let p = ParticleDescriptor::draw(&mut || 0.5);
        let style = p.style();
        assert!(style.contains("left: 50vw;"));
        assert!(style.contains("font-size: 22.5px;"));
        assert!(style.contains("animation-duration: 14s;"));
        assert!(style.contains("animation-delay: 2.5s;"));
    }
}
