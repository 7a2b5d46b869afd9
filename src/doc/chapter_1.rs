/*!
# Lines, Operands and Domains

## Lines

The store holds a fixed number of lines, 128 by default, each at most 63
bytes long. Longer text is cut. Line 0 is reserved and the last line is the
input buffer, so a script lives in lines 1 through 126. The scratch stack of
`push` and `pop` grows down from line 125, which means a long script and a
deep stack share the same space.

A line is executed like this:

```text
[.label ]keyword operand operand ...
```

Tokens are separated by spaces. A line whose first word is not a command is
data and does nothing when reached.

## Operands

| Form    | Meaning                                             |
|---------|-----------------------------------------------------|
| `.name` | the line labelled `name`, line 0 if there is none   |
| `:name` | the line whose number is written in line `.name`    |
| `@n`    | line `n`                                            |
| `%n`    | the line `n` below this one; `%-n` is above         |
| `[n`    | the line whose number is written in line `n`        |
| `'text` | the text itself                                     |
| `text`  | the text itself                                     |

Only the first operand of a command is ever written. When it is not a line
reference the result is dropped.

```text
let @20 'hello
let @21 @20
ptr @22 @21
let [22 'bye
```

After this, line 21 holds `bye` and line 22 holds `21`.

## Domains

Each command reads its operands in one domain.

 * Signed: 32-bit integers that wrap on overflow.
 * Unsigned: 32-bit integers. `-1` reads as `4294967295`.
 * Logic: unsigned input, written as `0b` and 32 binary digits.
 * Decimal: up to 16 digits with an optional fraction. Anything that does
   not fit is written as `FFFFFFFFFFFFFFFF`.
 * Float: 64-bit floating point.
 * Text: the line as it is.

Integers may be written in hexadecimal (`0x1F`) or binary (`0b101`). Spaces
and commas inside numbers are ignored, so `1,000` reads as `1000`. Text that
is not a number reads as zero.
*/
