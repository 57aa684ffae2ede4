//! Serializes the active preset plus the current parameter values into a
//! standalone React + @react-three/fiber component. The output is plain text
//! handed to the user; nothing here compiles or executes it, so escaping the
//! embedded shader exhaustively is this module's one correctness obligation.
use library::{ParamValue, Preset};

use crate::store::ParameterStore;

const UNIFORM_DEFS_MARK: &str = "@@UNIFORM_DEFS@@";
const FRAGMENT_SHADER_MARK: &str = "@@FRAGMENT_SHADER@@";

const COMPONENT_TEMPLATE: &str = r#"import React, { useRef } from 'react';
import { Canvas, useFrame, useThree } from '@react-three/fiber';
import * as THREE from 'three';

const ShaderComponent = () => {
  const meshRef = useRef<THREE.Mesh>(null);
  const { size } = useThree();

  useFrame((state) => {
    if (meshRef.current) {
      const mat = meshRef.current.material as THREE.ShaderMaterial;
      mat.uniforms.uTime.value = state.clock.getElapsedTime();
      mat.uniforms.uResolution.value.set(size.width, size.height);
    }
  });

  const vertexShader = `
    varying vec2 vUv;
    void main() {
      vUv = uv;
      gl_Position = vec4(position, 1.0);
    }
  `;

  const fragmentShader = `@@FRAGMENT_SHADER@@`;

  return (
    <mesh ref={meshRef}>
      <planeGeometry args={[2, 2]} />
      <shaderMaterial
        vertexShader={vertexShader}
        fragmentShader={fragmentShader}
        uniforms={{
          uTime: { value: 0 },
          uResolution: { value: new THREE.Vector2(size.width, size.height) },
@@UNIFORM_DEFS@@
        }}
      />
    </mesh>
  );
};

export default function App() {
  return (
    <div style={{ width: '100vw', height: '100vh', background: '#000' }}>
      <Canvas camera={{ position: [0, 0, 1] }}>
        <ShaderComponent />
      </Canvas>
    </div>
  );
}
"#;

/// Escapes text for embedding inside a JavaScript template literal.
///
/// Backslashes are escaped first so the markers added for backticks and
/// interpolation sequences cannot themselves be re-interpreted.
pub fn escape_template_literal(source: &str) -> String {
    let mut escaped = String::with_capacity(source.len());
    for ch in source.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '`' => escaped.push_str("\\`"),
            '$' => escaped.push_str("\\$"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn initializer_literal(value: &ParamValue) -> String {
    match value {
        ParamValue::Scalar(v) => format!("{v}"),
        ParamValue::Vector2([x, y]) => format!("new THREE.Vector2({x}, {y})"),
        ParamValue::Color(color) => format!("new THREE.Color('{color}')"),
        ParamValue::Boolean(flag) => flag.to_string(),
    }
}

/// Generates the complete component source for `preset` with every uniform
/// initialized to its current store value (descriptor default when absent).
pub fn react_component(preset: &Preset, store: &ParameterStore) -> String {
    let uniform_defs = preset
        .parameters
        .iter()
        .map(|(name, spec)| {
            let value = store.value_or_default(name, spec);
            format!("          {name}: {{ value: {} }},", initializer_literal(value))
        })
        .collect::<Vec<_>>()
        .join("\n");

    COMPONENT_TEMPLATE
        .replace(UNIFORM_DEFS_MARK, &uniform_defs)
        .replace(
            FRAGMENT_SHADER_MARK,
            &escape_template_literal(&preset.shader_source),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use library::{Category, HexColor, ParamSpec, ParamValue, Preset};

    fn demo_preset(shader: &str) -> Preset {
        Preset::new("demo", "Demo", "", Category::Noise, shader.to_string())
            .parameter("uScale", ParamSpec::scalar("Scale", 6.0, 1.0, 20.0, 0.1))
            .parameter(
                "uColorA",
                ParamSpec::color("Tint", HexColor::from_rgb(0x00, 0x2b, 0x5b)),
            )
            .parameter("uCenter", ParamSpec::vec2("Center", -0.745, 0.1))
            .parameter("uInvert", ParamSpec::boolean("Invert", false))
    }

    #[test]
    fn emits_current_values_as_typed_literals() {
        let preset = demo_preset("void main() {}");
        let mut store = ParameterStore::for_preset(&preset);
        store.set("uScale", ParamValue::Scalar(12.5));

        let code = react_component(&preset, &store);
        assert!(code.contains("uScale: { value: 12.5 },"));
        assert!(code.contains("uColorA: { value: new THREE.Color('#002b5b') },"));
        assert!(code.contains("uCenter: { value: new THREE.Vector2(-0.745, 0.1) },"));
        assert!(code.contains("uInvert: { value: false },"));
    }

    #[test]
    fn whole_scalars_print_without_a_trailing_zero() {
        let preset = demo_preset("void main() {}");
        let store = ParameterStore::for_preset(&preset);
        let code = react_component(&preset, &store);
        assert!(code.contains("uScale: { value: 6 },"));
    }

    #[test]
    fn embeds_shader_source_verbatim_modulo_escaping() {
        let preset = demo_preset("void main() { float x = 1.0; }");
        let store = ParameterStore::for_preset(&preset);
        let code = react_component(&preset, &store);
        assert!(code.contains("void main() { float x = 1.0; }"));
        assert!(code.contains("const fragmentShader = `"));
    }

    #[test]
    fn escapes_every_template_literal_delimiter() {
        assert_eq!(escape_template_literal("a`b"), "a\\`b");
        assert_eq!(escape_template_literal("${uTime}"), "\\${uTime}");
        assert_eq!(escape_template_literal("a\\b"), "a\\\\b");
        assert_eq!(escape_template_literal("\\`"), "\\\\\\`");
    }

    #[test]
    fn shader_with_backtick_stays_inside_the_literal() {
        let preset = demo_preset("// watch ` this\nvoid main() {}");
        let store = ParameterStore::for_preset(&preset);
        let code = react_component(&preset, &store);
        assert!(code.contains("// watch \\` this"));
        assert!(!code.contains("// watch ` this"));
    }

    #[test]
    fn output_is_a_complete_component() {
        let preset = demo_preset("void main() {}");
        let store = ParameterStore::for_preset(&preset);
        let code = react_component(&preset, &store);
        assert!(code.starts_with("import React"));
        assert!(code.contains("uTime: { value: 0 },"));
        assert!(code.contains("uResolution: { value: new THREE.Vector2(size.width, size.height) },"));
        assert!(code.trim_end().ends_with('}'));
        assert!(!code.contains(UNIFORM_DEFS_MARK));
        assert!(!code.contains(FRAGMENT_SHADER_MARK));
    }
}
