//! The built-in preset gallery: a fixed, process-wide immutable table built
//! once on first access. Shader text is opaque to the rest of the system; the
//! only contract is that each declared parameter corresponds to a uniform the
//! shader reads, which the tests below spot-check.
use std::sync::OnceLock;

use crate::color::HexColor;
use crate::schema::{ParamSpec, Preset};
use crate::Category;

/// Shared GLSL helper block (noise, SDFs, palettes) spliced between a
/// preset's uniform declarations and its main function.
const NOISE_GLSL: &str = r#"
// Basic Math & Constants
#define PI 3.14159265359
#define TWO_PI 6.28318530718

// Simplex 2D noise
vec3 permute(vec3 x) { return mod(((x*34.0)+1.0)*x, 289.0); }

float snoise(vec2 v){
  const vec4 C = vec4(0.211324865405187, 0.366025403784439,
           -0.577350269189626, 0.024390243902439);
  vec2 i  = floor(v + dot(v, C.yy) );
  vec2 x0 = v -   i + dot(i, C.xx);
  vec2 i1;
  i1 = (x0.x > x0.y) ? vec2(1.0, 0.0) : vec2(0.0, 1.0);
  vec4 x12 = x0.xyxy + C.xxzz;
  x12.xy -= i1;
  i = mod(i, 289.0);
  vec3 p = permute( permute( i.y + vec3(0.0, i1.y, 1.0 ))
  + i.x + vec3(0.0, i1.x, 1.0 ));
  vec3 m = max(0.5 - vec3(dot(x0,x0), dot(x12.xy,x12.xy),
    dot(x12.zw,x12.zw)), 0.0);
  m = m*m ; m = m*m ;
  vec3 x = 2.0 * fract(p * C.www) - 1.0;
  vec3 h = abs(x) - 0.5;
  vec3 ox = floor(x + 0.5);
  vec3 a0 = x - ox;
  m *= 1.79284291400159 - 0.85373472095314 * ( a0*a0 + h*h );
  vec3 g;
  g.x  = a0.x  * x0.x  + h.x  * x0.y;
  g.yz = a0.yz * x12.xz + h.yz * x12.yw;
  return 130.0 * dot(m, g);
}

// FBM (Fractal Brownian Motion) - Fixed 8 octaves for compiler stability
float fbm(vec2 p, int octaves, float persistence, float lacunarity) {
    float amp = 1.0;
    float freq = 1.0;
    float v = 0.0;
    for (int i = 0; i < 8; i++) {
        if(i >= octaves) break;
        v += amp * snoise(p * freq);
        amp *= persistence;
        freq *= lacunarity;
    }
    return v;
}

// Turbulence
float turbulence(vec2 p, int octaves) {
    float v = 0.0;
    float amp = 1.0;
    float freq = 1.0;
    for (int i = 0; i < 8; i++) {
        if(i >= octaves) break;
        v += amp * abs(snoise(p * freq));
        amp *= 0.5;
        freq *= 2.0;
    }
    return v;
}

// Ridged Multifractal
float ridged(vec2 p, int octaves) {
    float v = 0.0;
    float amp = 1.0;
    float freq = 1.0;
    for (int i = 0; i < 8; i++) {
        if(i >= octaves) break;
        float n = abs(snoise(p * freq));
        n = 1.0 - n;
        n *= n;
        v += n * amp;
        amp *= 0.5;
        freq *= 2.0;
    }
    return v;
}

// Cellular / Voronoi
vec2 hash2(vec2 p) {
    return fract(sin(vec2(dot(p,vec2(127.1,311.7)),dot(p,vec2(269.5,183.3))))*43758.5453);
}

vec3 voronoi(vec2 x) {
    vec2 n = floor(x);
    vec2 f = fract(x);
    vec2 mg, mr;
    float md = 8.0;
    for(int j=-1; j<=1; j++)
    for(int i=-1; i<=1; i++) {
        vec2 g = vec2(float(i),float(j));
        vec2 o = hash2(n + g);
        vec2 r = g + o - f;
        float d = dot(r,r);
        if(d<md) {
            md = d; mr = r; mg = g;
        }
    }
    md = 8.0;
    for(int j=-2; j<=2; j++)
    for(int i=-2; i<=2; i++) {
        vec2 g = mg + vec2(float(i),float(j));
        vec2 o = hash2(n + g);
        vec2 r = g + o - f;
        if(dot(mr-r,mr-r)>0.00001)
        md = min(md, dot(0.5*(mr+r), normalize(r-mr)));
    }
    return vec3(md, mr);
}

// Curl Noise (Vector Field)
vec2 curl(vec2 p, float time) {
    const float e = .01;
    float n1 = snoise(p + vec2(0, e) + time);
    float n2 = snoise(p - vec2(0, e) + time);
    float n3 = snoise(p + vec2(e, 0) + time);
    float n4 = snoise(p - vec2(e, 0) + time);
    return vec2((n1 - n2) / (2. * e), (n4 - n3) / (2. * e));
}

// SDF Primitives
float sdCircle(vec2 p, float r) { return length(p) - r; }
float sdBox(vec2 p, vec2 b) {
    vec2 d = abs(p)-b;
    return length(max(d,0.0)) + min(max(d.x,d.y),0.0);
}
float sdHexagon( vec2 p, float r ) {
    const vec3 k = vec3(-0.866025404, 0.5, 0.577350269);
    p = abs(p);
    p -= 2.0*min(dot(k.xy,p),0.0)*k.xy;
    p -= vec2(clamp(p.x, -k.z*r, k.z*r), r);
    return length(p)*sign(p.y);
}

// Blending SDF
float opSmoothUnion( float d1, float d2, float k ) {
    float h = clamp( 0.5 + 0.5*(d2-d1)/k, 0.0, 1.0 );
    return mix( d2, d1, h ) - k*h*(1.0-h);
}

// Color conversion helpers
vec3 hsb2rgb(vec3 c) {
    vec3 rgb = clamp(abs(mod(c.x*6.0+vec3(0.0,4.0,2.0),6.0)-3.0)-1.0, 0.0, 1.0);
    rgb = rgb*rgb*(3.0-2.0*rgb);
    return c.z * mix(vec3(1.0), rgb, c.y);
}

vec3 palette(float t, vec3 a, vec3 b, vec3 c, vec3 d) {
    return a + b * cos(6.28318 * (c * t + d));
}

// Domain Warp Tools
vec2 rotate(vec2 p, float a) {
    float s = sin(a); float c = cos(a);
    return p * mat2(c, -s, s, c);
}
"#;

static CATALOG: OnceLock<Vec<Preset>> = OnceLock::new();

/// All built-in presets in gallery order.
pub fn presets() -> &'static [Preset] {
    CATALOG.get_or_init(build).as_slice()
}

/// Looks up a preset by its stable id.
pub fn find(id: &str) -> Option<&'static Preset> {
    presets().iter().find(|preset| preset.id == id)
}

fn rgb(r: u8, g: u8, b: u8) -> HexColor {
    HexColor::from_rgb(r, g, b)
}

fn build() -> Vec<Preset> {
    let mut presets = Vec::new();

    // --- Noise & texture techniques ---
    presets.push(
        Preset::new(
            "worley-caustics",
            "Oceanic Caustics",
            "Worley noise with distance-to-edge calculation for organic water patterns.",
            Category::Noise,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uScale;
      uniform float uSpeed;
      uniform vec3 uColorA;
      uniform vec3 uColorB;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = (gl_FragCoord.xy - 0.5*uResolution.xy)/min(uResolution.y,uResolution.x);
          vec3 v = voronoi(uv * uScale + uTime * uSpeed);
          float d = v.x;
          vec3 col = mix(uColorA, uColorB, d);
          col += (1.0 - smoothstep(0.0, 0.08, d)) * 0.4;
          gl_FragColor = vec4(col, 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uScale", ParamSpec::scalar("Cell Density", 6.0, 1.0, 20.0, 0.1))
        .parameter("uSpeed", ParamSpec::scalar("Flow Speed", 0.3, 0.0, 2.0, 0.01))
        .parameter("uColorA", ParamSpec::color("Deep Blue", rgb(0x00, 0x2b, 0x5b)))
        .parameter("uColorB", ParamSpec::color("Surface Glow", rgb(0x00, 0xd2, 0xff))),
    );

    presets.push(
        Preset::new(
            "perlin-marble",
            "Liquid Marble",
            "Domain-warped FBM simulating complex mineral veins and flows.",
            Category::Noise,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uWarp;
      uniform float uDetail;
      uniform vec3 uTint;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = gl_FragCoord.xy/uResolution.y;
          vec2 q = vec2(fbm(uv * 3.0, 5, 0.5, 2.0), fbm(uv * 3.0 + vec2(1.2), 5, 0.5, 2.0));
          vec2 r = vec2(fbm(uv * 3.0 + 4.0*q*uWarp + vec2(1.7, 9.2), 5, 0.5, 2.0), fbm(uv * 3.0 + 4.0*q*uWarp + vec2(8.3, 2.8), 5, 0.5, 2.0));
          float f = fbm(uv * 3.0 + 4.0*r, 5, 0.5, 2.0);
          vec3 col = mix(vec3(0.05, 0.1, 0.15), uTint, clamp((f*f)*uDetail, 0.0, 1.0));
          gl_FragColor = vec4(col * (f*f + 0.5*f), 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uWarp", ParamSpec::scalar("Warp Intensity", 1.0, 0.1, 3.0, 0.1))
        .parameter("uDetail", ParamSpec::scalar("Vein Contrast", 4.0, 1.0, 10.0, 0.1))
        .parameter("uTint", ParamSpec::color("Mineral Color", rgb(0xff, 0x66, 0x00))),
    );

    presets.push(
        Preset::new(
            "ridged-multifractal-peaks",
            "Obsidian Ridges",
            "Sharpened noise valleys creating volcanic rock or mountain peaks.",
            Category::Noise,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uSharpness;
      uniform float uHeight;
      uniform vec3 uStoneColor;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = gl_FragCoord.xy/uResolution.y;
          float r = ridged(uv * 2.5 + uTime * 0.05, 8);
          r = pow(r, uSharpness) * uHeight;
          vec3 col = mix(vec3(0.02), uStoneColor, r);
          col += vec3(0.8, 0.9, 1.0) * pow(r, 12.0);
          gl_FragColor = vec4(col, 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uSharpness", ParamSpec::scalar("Ridge Sharpening", 3.0, 1.0, 10.0, 0.1))
        .parameter("uHeight", ParamSpec::scalar("Altitude Gain", 1.0, 0.1, 5.0, 0.1))
        .parameter("uStoneColor", ParamSpec::color("Rock Base", rgb(0x4a, 0x3f, 0x5a))),
    );

    presets.push(
        Preset::new(
            "anisotropic-silk",
            "Woven Silk",
            "Extremely stretched noise simulating fabric or organic hair textures.",
            Category::Noise,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uStretch;
      uniform float uLustre;
      uniform vec3 uBaseColor;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = gl_FragCoord.xy/uResolution.xy;
          float n = fbm(uv * vec2(uStretch, 1.0) + uTime * 0.1, 6, 0.5, 2.0);
          vec3 col = mix(vec3(0.05), uBaseColor, n);
          col += pow(max(0.0, n), 10.0) * uLustre;
          gl_FragColor = vec4(col, 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uStretch", ParamSpec::scalar("Fiber Density", 120.0, 10.0, 500.0, 1.0))
        .parameter("uLustre", ParamSpec::scalar("Material Lustre", 0.6, 0.0, 2.0, 0.1))
        .parameter("uBaseColor", ParamSpec::color("Fabric Tint", rgb(0x9c, 0x27, 0xb0))),
    );

    presets.push(
        Preset::new(
            "curl-noise-fluid",
            "Curl Streamlines",
            "Divergence-free vector field creating fluid-like swirling motion.",
            Category::Noise,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uSwirl;
      uniform float uScale;
      uniform vec3 uInkColor;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = (gl_FragCoord.xy - 0.5*uResolution.xy)/min(uResolution.y,uResolution.x);
          vec2 c = curl(uv * uScale, uTime * 0.2) * uSwirl;
          float n = fbm(uv * 5.0 + c, 6, 0.5, 2.0);
          vec3 col = mix(vec3(0.01), uInkColor, smoothstep(0.3, 0.7, n));
          col += pow(max(0.0, n), 8.0) * 0.5;
          gl_FragColor = vec4(col, 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uSwirl", ParamSpec::scalar("Fluid Chaos", 1.5, 0.1, 5.0, 0.1))
        .parameter("uScale", ParamSpec::scalar("Field Scale", 2.0, 0.5, 10.0, 0.1))
        .parameter("uInkColor", ParamSpec::color("Ink Hue", rgb(0x00, 0xff, 0xcc))),
    );

    // --- Fractals ---
    presets.push(
        Preset::new(
            "mandelbrot-explorer",
            "Fractal Horizon",
            "Deep-zoom Mandelbrot set with smooth escape-time coloring.",
            Category::Fractal,
            r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uZoom;
      uniform vec2 uCenter;
      uniform float uCycleSpeed;
      void main() {
          vec2 uv = (gl_FragCoord.xy - 0.5*uResolution.xy)/min(uResolution.y,uResolution.x);
          vec2 c = uCenter + uv * exp(-uZoom);
          vec2 z = vec2(0.0);
          float i = 0.0;
          for(int iter=0; iter<150; iter++) {
              z = vec2(z.x*z.x - z.y*z.y, 2.0*z.x*z.y) + c;
              if(dot(z,z) > 4.0) break;
              i++;
          }
          vec3 col = 0.5 + 0.5*cos(uTime * uCycleSpeed + i*0.15 + vec3(0,2,4));
          if(i == 150.0) col = vec3(0.0);
          gl_FragColor = vec4(col, 1.0);
      }
"#
            .to_string(),
        )
        .parameter("uZoom", ParamSpec::scalar("Zoom Depth", 1.0, 0.0, 20.0, 0.1))
        .parameter("uCenter", ParamSpec::vec2("Coordinates", -0.745, 0.1))
        .parameter("uCycleSpeed", ParamSpec::scalar("Cycle Velocity", 1.0, 0.0, 5.0, 0.1)),
    );

    presets.push(
        Preset::new(
            "julia-vortex-morph",
            "Julia Morph",
            "Dynamic Julia set with a rotating complex constant.",
            Category::Fractal,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uRadius;
      uniform float uSpeed;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = (gl_FragCoord.xy - 0.5*uResolution.xy)/min(uResolution.y,uResolution.x);
          vec2 c = vec2(sin(uTime*uSpeed), cos(uTime*uSpeed*0.7)) * uRadius;
          vec2 z = uv * 2.5;
          float i = 0.0;
          for(int iter=0; iter<100; iter++) {
              z = vec2(z.x*z.x - z.y*z.y, 2.0*z.x*z.y) + c;
              if(dot(z,z) > 4.0) break;
              i++;
          }
          gl_FragColor = vec4(hsb2rgb(vec3(i/100.0 + uTime*0.1, 0.8, 1.0)), 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uRadius", ParamSpec::scalar("Complexity", 0.6, 0.1, 1.2, 0.01))
        .parameter("uSpeed", ParamSpec::scalar("Morph Speed", 0.4, 0.0, 2.0, 0.01)),
    );

    presets.push(
        Preset::new(
            "newton-complex-roots",
            "Newton Basin",
            "Fractal created by Newton-Raphson iterations for roots of z^P - 1.",
            Category::Fractal,
            r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uPower;
      uniform float uIterations;
      uniform float uHueShift;
      void main() {
          vec2 uv = (gl_FragCoord.xy - 0.5*uResolution.xy)/min(uResolution.y,uResolution.x);
          vec2 z = uv * 3.0;
          float iter = 0.0;
          float maxI = uIterations;
          for(int i=0; i<80; i++) {
              if(float(i) >= maxI) break;
              vec2 z2 = vec2(z.x*z.x - z.y*z.y, 2.0*z.x*z.y);
              vec2 z3 = vec2(z2.x*z.x - z2.y*z.y, z2.x*z.y + z2.y*z.x);
              vec2 f = z3 - vec2(1.0, 0.0);
              vec2 df = 3.0 * z2;
              float den = dot(df, df) + 0.00001;
              z -= vec2(f.x*df.x + f.y*df.y, f.y*df.x - f.x*df.y) / den;
              iter++;
              if(dot(f,f) < 0.0001) break;
          }
          float angle = atan(z.y, z.x);
          vec3 col = 0.5 + 0.5*cos(angle + uHueShift + uTime*0.1 + vec3(0,2,4));
          gl_FragColor = vec4(col * (1.0 - iter/maxI), 1.0);
      }
"#
            .to_string(),
        )
        .parameter("uPower", ParamSpec::scalar("Root Power", 3.0, 2.0, 12.0, 1.0))
        .parameter("uIterations", ParamSpec::scalar("Accuracy", 35.0, 5.0, 80.0, 1.0))
        .parameter("uHueShift", ParamSpec::scalar("Color Rotation", 0.0, 0.0, 6.28, 0.1)),
    );

    presets.push(
        Preset::new(
            "menger-carpet-fractal",
            "Menger Matrix",
            "Recursive square subdivision creating a 2D Menger Sponge cross-section.",
            Category::Fractal,
            r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uRecursion;
      uniform vec3 uMainColor;
      void main() {
          vec2 uv = (gl_FragCoord.xy - 0.5*uResolution.xy)/uResolution.y;
          uv = abs(uv);
          float res = 1.0;
          int d = int(uRecursion);
          for(int i=0; i<8; i++) {
              if(i >= d) break;
              vec2 f = fract(uv * 3.0);
              if(f.x > 0.333 && f.x < 0.666 && f.y > 0.333 && f.y < 0.666) {
                  res = 0.0;
                  break;
              }
              uv *= 3.0;
          }
          gl_FragColor = vec4(uMainColor * res, 1.0);
      }
"#
            .to_string(),
        )
        .parameter("uRecursion", ParamSpec::scalar("Depth", 5.0, 1.0, 8.0, 1.0))
        .parameter("uMainColor", ParamSpec::color("Matrix Hue", rgb(0x00, 0xff, 0xaa))),
    );

    // --- Geometry & space ---
    presets.push(
        Preset::new(
            "truchet-flow-pipes",
            "Truchet Pipes",
            "Interconnected tiling logic creating a pseudo-3D pipe system.",
            Category::Geometry,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uDensity;
      uniform float uGirth;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = gl_FragCoord.xy/uResolution.y * uDensity;
          vec2 i = floor(uv); vec2 f = fract(uv);
          float r = hash2(i).x;
          if(r > 0.5) f.x = 1.0 - f.x;
          float d = abs(length(f) - 0.5);
          float d2 = abs(length(f-vec2(1.0)) - 0.5);
          float dist = min(d, d2);
          vec3 col = vec3(smoothstep(uGirth, uGirth-0.02, dist));
          col *= hsb2rgb(vec3(r + uTime*0.1, 0.6, 1.0));
          gl_FragColor = vec4(col, 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uDensity", ParamSpec::scalar("Grid Scale", 8.0, 2.0, 30.0, 1.0))
        .parameter("uGirth", ParamSpec::scalar("Pipe Width", 0.12, 0.01, 0.45, 0.01)),
    );

    presets.push(
        Preset::new(
            "metaballs-organic",
            "Viscous Blobs",
            "Smooth-union blending of distance fields for biological metaball effects.",
            Category::Geometry,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uViscosity;
      uniform float uCount;
      uniform vec3 uBaseColor;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = (gl_FragCoord.xy - 0.5*uResolution.xy)/uResolution.y;
          float d = 100.0;
          int n = int(uCount);
          for(int i=0; i<12; i++) {
              if(i >= n) break;
              float fi = float(i);
              float t = uTime * 0.8 + fi * 2.3;
              vec2 p = vec2(sin(t*0.7 + fi), cos(t*0.5 + fi*1.1)) * 0.45;
              d = opSmoothUnion(d, sdCircle(uv - p, 0.1), uViscosity);
          }
          vec3 col = mix(vec3(0.01), uBaseColor, 1.0 - smoothstep(0.0, 0.02, d));
          col += uBaseColor * 0.2 * exp(-15.0 * abs(d));
          gl_FragColor = vec4(col, 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uViscosity", ParamSpec::scalar("Fluidity", 0.25, 0.05, 0.6, 0.01))
        .parameter("uCount", ParamSpec::scalar("Entity Count", 6.0, 1.0, 12.0, 1.0))
        .parameter("uBaseColor", ParamSpec::color("Liquid Tint", rgb(0x00, 0x88, 0xff))),
    );

    presets.push(
        Preset::new(
            "hexagonal-lattice-pulse",
            "Neural Hex",
            "SDF hexagon grid with distance-based pulse dynamics and scanlines.",
            Category::Geometry,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uScale;
      uniform vec3 uLineColor;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = (gl_FragCoord.xy - 0.5*uResolution.xy)/uResolution.y;
          float d = sdHexagon(fract(uv * uScale) - 0.5, 0.42);
          float pulse = sin(length(uv)*6.0 - uTime*3.5)*0.5+0.5;
          float mask = smoothstep(0.0, -0.04, d);
          vec3 col = mix(vec3(0.02), uLineColor, mask * pulse);
          col += uLineColor * 0.1 * sin(uv.y * 200.0 + uTime*10.0);
          gl_FragColor = vec4(col, 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uScale", ParamSpec::scalar("Lattice Density", 12.0, 5.0, 40.0, 1.0))
        .parameter("uLineColor", ParamSpec::color("Circuit Color", rgb(0xff, 0x00, 0x88))),
    );

    // --- Dynamics & effects ---
    presets.push(
        Preset::new(
            "digital-rain-optimized",
            "Matrix Echo",
            "Cascading digital rain with varying speeds and glow trails.",
            Category::Dynamics,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uVelocity;
      uniform float uGrid;
      uniform vec3 uCodeColor;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = gl_FragCoord.xy/uResolution.xy;
          float col_idx = floor(uv.x * uGrid);
          float speed = 2.5 + hash2(vec2(col_idx)).x * 4.0;
          float y_off = fract(uv.y + uTime * speed * 0.1 * uVelocity + hash2(vec2(col_idx)).y);
          float glyph = step(0.65, snoise(vec2(col_idx, floor(uv.y * 35.0))));
          vec3 color = uCodeColor * (1.0 - y_off) * glyph;
          gl_FragColor = vec4(color, 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uVelocity", ParamSpec::scalar("Fall Velocity", 1.2, 0.1, 4.0, 0.1))
        .parameter("uGrid", ParamSpec::scalar("Character Width", 50.0, 10.0, 120.0, 1.0))
        .parameter("uCodeColor", ParamSpec::color("Code Glow", rgb(0x00, 0xff, 0x44))),
    );

    presets.push(
        Preset::new(
            "vhs-distorted-drift",
            "Analog Decay",
            "Post-process VHS emulation with tracking jitter and chroma noise.",
            Category::Dynamics,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uGlitch;
      uniform float uNoise;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = gl_FragCoord.xy/uResolution.xy;
          float drift = snoise(vec2(uTime*12.0, uv.y*8.0)) * uGlitch;
          float r = snoise(uv + vec2(drift, 0));
          float g = snoise(uv);
          float b = snoise(uv - vec2(drift, 0));
          float staticN = hash2(uv + uTime).x * uNoise;
          vec3 col = vec3(r, g, b) * 0.5 + 0.5 + staticN;
          col *= 0.85 + 0.15 * sin(uv.y * 450.0 + uTime * 25.0);
          gl_FragColor = vec4(col, 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uGlitch", ParamSpec::scalar("Tracking Error", 0.04, 0.0, 0.25, 0.001))
        .parameter("uNoise", ParamSpec::scalar("White Noise", 0.1, 0.0, 0.4, 0.01)),
    );

    presets.push(
        Preset::new(
            "boreal-aurora-spectral",
            "Ghost Aurora",
            "Ethereal vertical light ribbons with spectral color cycling.",
            Category::Dynamics,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uAmplitude;
      uniform float uSpeed;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = gl_FragCoord.xy/uResolution.xy;
          float n = fbm(vec2(uv.x * 2.2, uTime * 0.2 * uSpeed), 5, 0.5, 2.0);
          float ribbon = exp(-35.0 * abs(uv.y - 0.5 - n * uAmplitude));
          vec3 col = hsb2rgb(vec3(n + uTime * 0.08, 0.7, 1.0)) * ribbon * 3.0;
          gl_FragColor = vec4(col, 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uAmplitude", ParamSpec::scalar("Wave Stretch", 0.3, 0.05, 0.9, 0.01))
        .parameter("uSpeed", ParamSpec::scalar("Drift Speed", 1.0, 0.1, 5.0, 0.1)),
    );

    presets.push(
        Preset::new(
            "plasma-neon-interfere",
            "Cyber Plasma",
            "Classic trigonometric plasma interference with HSB mapping.",
            Category::Dynamics,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uEnergy;
      uniform float uScale;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 p = gl_FragCoord.xy / uResolution.xy;
          float v = sin(p.x*10.0*uScale + uTime) + sin(p.y*14.0*uScale + uTime*0.9) + sin((p.x+p.y)*12.0*uScale + uTime*1.1);
          v += sin(sqrt(p.x*p.x + p.y*p.y)*9.0*uScale + uTime);
          gl_FragColor = vec4(hsb2rgb(vec3(v*0.2*uEnergy + uTime*0.12, 0.85, 1.0)), 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uEnergy", ParamSpec::scalar("Interference Energy", 1.2, 0.2, 5.0, 0.1))
        .parameter("uScale", ParamSpec::scalar("Pattern Scale", 1.0, 0.2, 4.0, 0.1)),
    );

    presets.push(
        Preset::new(
            "volumetric-fog-raymarch",
            "Nebula Mist",
            "Pseudo-3D raymarching through a noise field for depth and density.",
            Category::Dynamics,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uThickness;
      uniform vec3 uMistColor;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = (gl_FragCoord.xy - 0.5*uResolution.xy)/uResolution.y;
          vec3 ro = vec3(0, 0, 4);
          vec3 rd = normalize(vec3(uv, -1.0));
          float acc = 0.0;
          for(int i=0; i<40; i++) {
              vec3 p = ro + rd * float(i) * 0.12;
              float n = fbm(p.xy * 1.8 + vec2(0, p.z + uTime*0.25), 4, 0.5, 2.0);
              acc += max(0.0, n - 0.4) * uThickness;
          }
          gl_FragColor = vec4(uMistColor * acc, 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uThickness", ParamSpec::scalar("Gas Density", 0.22, 0.02, 0.6, 0.01))
        .parameter("uMistColor", ParamSpec::color("Ethereal Tint", rgb(0xa0, 0x33, 0xff))),
    );

    presets.push(
        Preset::new(
            "cyber-ripple-warp-field",
            "Warp Ripples",
            "Intersecting waves distorted by high-frequency Simplex noise.",
            Category::Dynamics,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uFrequency;
      uniform float uDistortion;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = gl_FragCoord.xy/uResolution.xy;
          float noise = snoise(uv * 6.0 + uTime * 0.15) * uDistortion;
          float v = sin((uv.x + noise)*uFrequency + uTime*2.5) * sin((uv.y + noise)*uFrequency - uTime*2.5);
          gl_FragColor = vec4(hsb2rgb(vec3(v*0.5+0.5, 0.95, 1.0)), 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uFrequency", ParamSpec::scalar("Wave Count", 25.0, 5.0, 75.0, 1.0))
        .parameter("uDistortion", ParamSpec::scalar("Spatial Warp", 0.12, 0.0, 0.6, 0.01)),
    );

    presets.push(
        Preset::new(
            "dragon-fractal-curve",
            "Dragon Curve",
            "Iterative fold geometry approximating the self-similar Dragon Curve.",
            Category::Fractal,
            r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uDepth;
      uniform float uAngle;
      void main() {
          vec2 uv = (gl_FragCoord.xy - 0.5*uResolution.xy)/uResolution.y;
          int it = int(uDepth);
          for(int i=0; i<16; i++) {
              if(i >= it) break;
              uv = abs(uv) - 0.5;
              float a = uAngle + 0.06*sin(uTime*0.5);
              float s = sin(a); float c = cos(a);
              uv = mat2(c, -s, s, c) * uv;
          }
          gl_FragColor = vec4(vec3(smoothstep(0.02, 0.0, length(uv))), 1.0);
      }
"#
            .to_string(),
        )
        .parameter("uDepth", ParamSpec::scalar("Folding Order", 11.0, 1.0, 16.0, 1.0))
        .parameter("uAngle", ParamSpec::scalar("Fold Bias", 0.8, 0.0, 3.14, 0.01)),
    );

    presets.push(
        Preset::new(
            "mercury-chrome-liquid",
            "Mercury Chrome",
            "High-specular domain warped noise for metallic liquid effects.",
            Category::Noise,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uFlow;
      uniform float uGloss;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = gl_FragCoord.xy/uResolution.y;
          float n = fbm(uv*2.2 + fbm(uv*2.0 + uTime*uFlow, 5, 0.5, 2.0), 6, 0.5, 2.0);
          float spec = pow(max(0.0, n), 12.0) * uGloss;
          gl_FragColor = vec4(vec3(n*0.35 + spec), 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uFlow", ParamSpec::scalar("Viscosity", 0.15, 0.01, 0.6, 0.01))
        .parameter("uGloss", ParamSpec::scalar("Specular Shine", 5.0, 1.0, 15.0, 0.1)),
    );

    presets.push(
        Preset::new(
            "techno-iris-mechanical",
            "Mech Iris",
            "Nested geometric rotation simulating a bionic aperture.",
            Category::Geometry,
            r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uLayers;
      uniform float uTorque;
      uniform vec3 uCircuitGlow;
      void main() {
          vec2 uv = (gl_FragCoord.xy - 0.5*uResolution.xy)/uResolution.y;
          float r = length(uv); float a = atan(uv.y, uv.x);
          float res = 0.0;
          int n = int(uLayers);
          for(int i=1; i<12; i++) {
              if(i >= n) break;
              float fi = float(i);
              float d = step(fi*0.045, r) * step(r, fi*0.045 + 0.006);
              res += d * step(0.5, sin(a*fi*3.5 + uTime*fi*uTorque));
          }
          gl_FragColor = vec4(uCircuitGlow * res, 1.0);
      }
"#
            .to_string(),
        )
        .parameter("uLayers", ParamSpec::scalar("Aperture Layers", 8.0, 2.0, 12.0, 1.0))
        .parameter("uTorque", ParamSpec::scalar("Spin Velocity", 1.2, 0.1, 5.0, 0.1))
        .parameter("uCircuitGlow", ParamSpec::color("Signal Hue", rgb(0x00, 0xcc, 0xff))),
    );

    presets.push(
        Preset::new(
            "fresnel-prism-diffraction",
            "Prism Aura",
            "Edge-based refraction logic using pseudo-fresnel calculations.",
            Category::Dynamics,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uPower;
      uniform float uReflect;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = (gl_FragCoord.xy - 0.5*uResolution.xy)/uResolution.y;
          float n = snoise(uv*4.0 + uTime*0.4);
          float fresnel = pow(1.0 - dot(normalize(vec3(uv, 1.2)), vec3(0,0,1)), uPower);
          gl_FragColor = vec4(hsb2rgb(vec3(n + uTime*0.15, 0.65, 1.0)) * fresnel * uReflect, 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uPower", ParamSpec::scalar("Edge Falloff", 5.0, 1.0, 12.0, 0.1))
        .parameter("uReflect", ParamSpec::scalar("Luminance", 2.5, 0.5, 8.0, 0.1)),
    );

    presets.push(
        Preset::new(
            "newton-julia-vortex-set",
            "Fractal Storm",
            "A hybrid Newton-Julia set with period-mapped coloring.",
            Category::Fractal,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform vec2 uConstant;
      uniform float uScaleFactor;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = (gl_FragCoord.xy - 0.5*uResolution.xy)/uResolution.y;
          vec2 z = uv * uScaleFactor;
          float iter = 0.0;
          for(int i=0; i<70; i++) {
              z = vec2(z.x*z.x - z.y*z.y, 2.0*z.x*z.y) + uConstant;
              if(length(z) > 4.0) break;
              iter++;
          }
          gl_FragColor = vec4(hsb2rgb(vec3(iter/70.0 + uTime*0.1, 0.75, 1.0)), 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uConstant", ParamSpec::vec2("Complex Constant", -0.38, 0.62))
        .parameter("uScaleFactor", ParamSpec::scalar("Viewport Zoom", 2.2, 0.5, 10.0, 0.1)),
    );

    presets.push(
        Preset::new(
            "sand-dunes-wind",
            "Windy Dunes",
            "Highly anisotropic noise layers simulating wind-swept desert sand.",
            Category::Noise,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uGrain;
      uniform float uWind;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = gl_FragCoord.xy/uResolution.xy;
          float n = fbm(uv * vec2(1.2, 35.0) + uTime*uWind, 6, 0.5, 2.0);
          vec3 col = mix(vec3(0.85, 0.6, 0.25), vec3(1.0, 0.85, 0.5), n);
          col += hash2(uv + uTime).x * uGrain;
          gl_FragColor = vec4(col, 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uGrain", ParamSpec::scalar("Sand Texture", 0.05, 0.0, 0.2, 0.01))
        .parameter("uWind", ParamSpec::scalar("Wind Power", 0.06, 0.01, 0.4, 0.01)),
    );

    presets.push(
        Preset::new(
            "stained-glass-mosaic",
            "Prism Mosaic",
            "Voronoi tiling with quantized color pools and lead-line borders.",
            Category::Geometry,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uTileScale;
      uniform float uBorder;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = gl_FragCoord.xy/uResolution.y * uTileScale;
          vec3 v = voronoi(uv + uTime*0.08);
          vec3 col = palette(v.y*3.5, vec3(0.5), vec3(0.5), vec3(1.0), vec3(0.0, 0.33, 0.67));
          col *= smoothstep(0.0, uBorder, v.x);
          gl_FragColor = vec4(col, 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uTileScale", ParamSpec::scalar("Mosaic Detail", 6.5, 2.0, 20.0, 0.1))
        .parameter("uBorder", ParamSpec::scalar("Lead Width", 0.08, 0.01, 0.25, 0.01)),
    );

    presets.push(
        Preset::new(
            "koch-snowflake-fractal",
            "Koch Edge",
            "Recursive line folding simulating the Koch Snowflake boundary.",
            Category::Fractal,
            r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uSubdivision;
      uniform float uRotation;
      void main() {
          vec2 uv = (gl_FragCoord.xy - 0.5*uResolution.xy)/uResolution.y;
          float a = uRotation + uTime*0.2;
          float s = sin(a); float c = cos(a);
          uv = mat2(c, -s, s, c) * uv;
          uv.x = abs(uv.x) - 0.5;
          int depth = int(uSubdivision);
          for(int i=0; i<10; i++) {
              if(i >= depth) break;
              uv = vec2(abs(uv.x), uv.y);
              float angle = 1.04719; // 60 degrees
              float sa = sin(angle); float ca = cos(angle);
              uv -= vec2(0.5, 0.0);
              uv = mat2(ca, -sa, sa, ca) * uv;
              uv.x = abs(uv.x);
          }
          gl_FragColor = vec4(vec3(smoothstep(0.01, 0.0, length(uv))), 1.0);
      }
"#
            .to_string(),
        )
        .parameter("uSubdivision", ParamSpec::scalar("Snowflake Order", 5.0, 1.0, 10.0, 1.0))
        .parameter("uRotation", ParamSpec::scalar("Spin Offset", 0.0, 0.0, 6.28, 0.1)),
    );

    presets.push(
        Preset::new(
            "reaction-diff-approx-fluid",
            "Turing Patterns",
            "Noise-based thresholding approximating biological reaction-diffusion patterns.",
            Category::Dynamics,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uGrowth;
      uniform float uShrink;
      uniform vec3 uCellColor;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = gl_FragCoord.xy/uResolution.y;
          float n1 = fbm(uv * 12.0 + uTime*0.05, 5, 0.5, 2.0);
          float n2 = fbm(uv * 18.0 + n1 * uGrowth, 5, 0.5, 2.0);
          float res = smoothstep(0.44, 0.46, n2) - smoothstep(uShrink, uShrink+0.03, n2);
          gl_FragColor = vec4(mix(vec3(0.03), uCellColor, res), 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uGrowth", ParamSpec::scalar("Reaction Power", 5.0, 1.0, 15.0, 0.1))
        .parameter("uShrink", ParamSpec::scalar("Diffusion Limit", 0.55, 0.4, 0.8, 0.01))
        .parameter("uCellColor", ParamSpec::color("Cell Tint", rgb(0xaa, 0xff, 0x00))),
    );

    presets.push(
        Preset::new(
            "star-nebula-clouds",
            "Star Nebula",
            "Multi-layered gaseous FBM simulating cosmic star-birth regions.",
            Category::Dynamics,
            [
                r#"
      uniform float uTime;
      uniform vec2 uResolution;
      uniform float uGlow;
      uniform vec3 uCoreColor;
"#,
                NOISE_GLSL,
                r#"
      void main() {
          vec2 uv = (gl_FragCoord.xy - 0.5*uResolution.xy)/uResolution.y;
          float n = fbm(uv*2.5 + uTime*0.04, 7, 0.5, 2.0);
          vec3 col = hsb2rgb(vec3(n*0.5 + uTime*0.02, 0.6, 1.0)) * n;
          col += vec3(pow(max(0.0, n-0.35), 6.0)*uGlow) * uCoreColor;
          gl_FragColor = vec4(col, 1.0);
      }
"#,
            ]
            .concat(),
        )
        .parameter("uGlow", ParamSpec::scalar("Stellar Burn", 15.0, 1.0, 40.0, 0.5))
        .parameter("uCoreColor", ParamSpec::color("Gas Core", rgb(0xff, 0xaa, 0xee))),
    );

    presets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ParamValue;

    #[test]
    fn every_preset_validates() {
        for preset in presets() {
            let issues = preset.validate();
            assert!(issues.is_empty(), "{}: {issues:?}", preset.id);
        }
    }

    #[test]
    fn preset_ids_are_unique() {
        let mut ids: Vec<&str> = presets().iter().map(|preset| preset.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn every_parameter_is_declared_in_its_shader() {
        for preset in presets() {
            for name in preset.parameters.names() {
                assert!(
                    preset.shader_source.contains(name),
                    "preset '{}' never references '{}'",
                    preset.id,
                    name
                );
            }
        }
    }

    #[test]
    fn all_categories_are_populated() {
        for category in Category::ALL {
            assert!(
                presets().iter().any(|preset| preset.category == category),
                "no preset in {category}"
            );
        }
    }

    #[test]
    fn find_resolves_known_ids_only() {
        let preset = find("worley-caustics").expect("catalog preset");
        assert_eq!(preset.name, "Oceanic Caustics");
        assert!(find("missing-preset").is_none());
    }

    #[test]
    fn worley_defaults_match_the_gallery() {
        let preset = find("worley-caustics").unwrap();
        let scale = preset.parameters.get("uScale").unwrap();
        assert_eq!(scale.default, ParamValue::Scalar(6.0));
        let color = preset.parameters.get("uColorA").unwrap();
        assert_eq!(
            color.default,
            ParamValue::Color(HexColor::from_rgb(0x00, 0x2b, 0x5b))
        );
    }
}
