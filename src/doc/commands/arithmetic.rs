/*!
# `INT UINT INTB FLOAT <d> <a> <op> <b>`
## Purpose
Computes `a op b` and writes the result to `d`.

## Remarks
`int` works on signed and `uint` on unsigned 32-bit integers. Both wrap
around on overflow and both take `+ - * / %`, the bitwise `& | ^` and the
shifts `<< >>`. Division by zero gives zero.

`intb` works on decimals of up to 16 digits and takes `+ - * / %`. A result
that does not fit, and any division by zero, is written as
`FFFFFFFFFFFFFFFF`. Digits past the sixteenth are dropped from fractions.

`float` takes `+ - * / %` and the single operand functions
`sqrt rad sin cos tan ln log abs neg`, written `float d fn a`.

An operator the domain does not know leaves `d` alone. A missing operator
adds.

## Example
```text
int @20 7 / 2
uint @21 0 - 1
intb @22 0.1 + 0.2
float @23 sqrt 2
print @20 \s @21 \s @22 \s @23
3 4294967295 0.3 1.4142135623730951
```
*/
